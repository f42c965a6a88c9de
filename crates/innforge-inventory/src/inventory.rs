//! The inventory: four fixed-size slot pools and the allocation policy.
//!
//! Allocation is a linear scan from slot 0, so the lowest free index
//! always wins. That keeps bookings reproducible.
//!
//! A booked room's lifecycle is driven through [`Inventory::apply`]. When
//! a room is cancelled or checked out it is back in `Available`, and its
//! slot is released:
//!
//! ```text
//! book()                       apply(CheckIn)            apply(CheckOut)
//! Empty ──→ Occupied(Reserved) ──────────→ Occupied(Occupied) ──────→ Empty
//!                 │
//!                 └──────────── apply(Cancel) ───────────────────────→ Empty
//! ```
//!
//! Invariant: a room stored in a slot is never in the `Available` state.

use innforge_room::{
    FeatureSet, Outcome, PricingPolicy, RoomAction, RoomCategory, RoomInstance, RoomState,
    create_for,
};

use crate::{Capacities, InventoryError, Slot};

/// Receipt for a successful booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub category: RoomCategory,
    /// 0-based slot index inside the category's pool.
    pub slot: usize,
    /// Room description including feature suffixes.
    pub description: String,
    /// Catalog rate run through the room's policy and features.
    pub nightly_price: f64,
}

impl Booking {
    /// 1-based room number as shown to guests.
    pub fn room_number(&self) -> usize {
        self.slot + 1
    }
}

/// What [`Inventory::apply`] did to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleReport {
    pub outcome: Outcome,
    /// State of the room after the action.
    pub state: RoomState,
    /// `true` if the room returned to `Available` and its slot was freed.
    pub released: bool,
}

/// The hotel's room inventory.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// One pool per category, in [`RoomCategory::ALL`] order.
    pools: [Vec<Slot>; 4],
}

impl Inventory {
    /// Creates an inventory with every slot empty.
    pub fn new(capacities: Capacities) -> Self {
        let pool = |category: RoomCategory| vec![Slot::Empty; capacities.get(category)];
        Self {
            pools: RoomCategory::ALL.map(pool),
        }
    }

    /// Total slots in a category.
    pub fn capacity(&self, category: RoomCategory) -> usize {
        self.pool(category).len()
    }

    /// Number of empty slots in a category.
    pub fn check_availability(&self, category: RoomCategory) -> usize {
        self.pool(category).iter().filter(|slot| slot.is_empty()).count()
    }

    /// Indices of every slot currently holding a booking.
    pub fn occupied_slots(&self, category: RoomCategory) -> Vec<usize> {
        self.pool(category)
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// The room in a slot, if the slot exists and is occupied.
    pub fn room(&self, category: RoomCategory, slot: usize) -> Option<&RoomInstance> {
        self.pool(category).get(slot).and_then(Slot::room)
    }

    /// Books an undecorated room in the lowest free slot.
    ///
    /// # Errors
    /// Returns [`InventoryError::NoCapacity`] if every slot is taken. The
    /// pool is left untouched in that case.
    pub fn book(
        &mut self,
        category: RoomCategory,
        policy: PricingPolicy,
    ) -> Result<Booking, InventoryError> {
        self.book_with(category, policy, &FeatureSet::new())
    }

    /// Books a room carrying `features` in the lowest free slot.
    pub fn book_with(
        &mut self,
        category: RoomCategory,
        policy: PricingPolicy,
        features: &FeatureSet,
    ) -> Result<Booking, InventoryError> {
        let pool = self.pool_mut(category);
        let Some(slot) = pool.iter().position(Slot::is_empty) else {
            tracing::warn!(%category, capacity = pool.len(), "no capacity left");
            return Err(InventoryError::NoCapacity(category));
        };

        let mut room = create_for(category, policy).with_features(features);
        room.apply(RoomAction::Book);

        let booking = Booking {
            category,
            slot,
            description: room.description(),
            nightly_price: room.price(category.nightly_rate()),
        };
        pool[slot] = Slot::Occupied(room);

        tracing::info!(
            %category,
            slot,
            %policy,
            price = booking.nightly_price,
            "room booked"
        );
        Ok(booking)
    }

    /// Drives the lifecycle of the room in `slot`.
    ///
    /// If the action returns the room to `Available` (cancel or check-out)
    /// the slot is released.
    ///
    /// # Errors
    /// - [`InventoryError::SlotOutOfRange`] if `slot` is past the pool.
    /// - [`InventoryError::EmptySlot`] if nothing is booked there.
    pub fn apply(
        &mut self,
        category: RoomCategory,
        slot: usize,
        action: RoomAction,
    ) -> Result<LifecycleReport, InventoryError> {
        let pool = self.pool_mut(category);
        let capacity = pool.len();
        let entry = pool.get_mut(slot).ok_or(InventoryError::SlotOutOfRange {
            category,
            slot,
            capacity,
        })?;
        let room = entry
            .room_mut()
            .ok_or(InventoryError::EmptySlot { category, slot })?;

        let outcome = room.apply(action);
        let state = room.state();
        let released = state == RoomState::Available;
        if released {
            entry.take();
            tracing::info!(%category, slot, %outcome, "slot released");
        }

        Ok(LifecycleReport {
            outcome,
            state,
            released,
        })
    }

    fn pool(&self, category: RoomCategory) -> &[Slot] {
        &self.pools[pool_index(category)]
    }

    fn pool_mut(&mut self, category: RoomCategory) -> &mut Vec<Slot> {
        &mut self.pools[pool_index(category)]
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(Capacities::default())
    }
}

fn pool_index(category: RoomCategory) -> usize {
    match category {
        RoomCategory::LuxuryDouble => 0,
        RoomCategory::DeluxeDouble => 1,
        RoomCategory::LuxurySingle => 2,
        RoomCategory::DeluxeSingle => 3,
    }
}

#[cfg(test)]
mod tests {
    use innforge_room::Feature;

    use super::*;

    #[test]
    fn test_new_inventory_is_empty() {
        let inv = Inventory::default();
        for category in RoomCategory::ALL {
            assert_eq!(inv.check_availability(category), category.default_capacity());
            assert_eq!(inv.capacity(category), category.default_capacity());
            assert!(inv.occupied_slots(category).is_empty());
        }
    }

    #[test]
    fn test_book_fills_lowest_slot_and_reserves_room() {
        let mut inv = Inventory::default();
        let booking = inv.book(RoomCategory::LuxurySingle, PricingPolicy::Standard).unwrap();

        assert_eq!(booking.slot, 0);
        assert_eq!(booking.room_number(), 1);
        assert_eq!(booking.description, "Single Room");
        assert_eq!(booking.nightly_price, 2200.0);

        let room = inv.room(RoomCategory::LuxurySingle, 0).unwrap();
        assert_eq!(room.state(), RoomState::Reserved);
        assert_eq!(inv.check_availability(RoomCategory::LuxurySingle), 9);
    }

    #[test]
    fn test_book_with_features_prices_extras() {
        let mut inv = Inventory::default();
        let features = FeatureSet::new().with(Feature::Breakfast).with(Feature::WiFi);
        let booking = inv
            .book_with(RoomCategory::DeluxeDouble, PricingPolicy::Discounted, &features)
            .unwrap();

        assert_eq!(booking.description, "Double Room, Breakfast, Wi-Fi");
        assert!((booking.nightly_price - (2700.0 + 500.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity_pool_is_always_full() {
        let mut inv = Inventory::new(Capacities { luxury_double: 0, ..Capacities::default() });
        assert_eq!(
            inv.book(RoomCategory::LuxuryDouble, PricingPolicy::Standard),
            Err(InventoryError::NoCapacity(RoomCategory::LuxuryDouble))
        );
    }

    #[test]
    fn test_apply_errors() {
        let mut inv = Inventory::new(Capacities::uniform(2));
        assert_eq!(
            inv.apply(RoomCategory::DeluxeSingle, 2, RoomAction::CheckIn),
            Err(InventoryError::SlotOutOfRange {
                category: RoomCategory::DeluxeSingle,
                slot: 2,
                capacity: 2,
            })
        );
        assert_eq!(
            inv.apply(RoomCategory::DeluxeSingle, 1, RoomAction::CheckIn),
            Err(InventoryError::EmptySlot { category: RoomCategory::DeluxeSingle, slot: 1 })
        );
    }

    #[test]
    fn test_rejected_action_keeps_slot() {
        let mut inv = Inventory::new(Capacities::uniform(1));
        inv.book(RoomCategory::DeluxeSingle, PricingPolicy::Standard).unwrap();

        let report = inv.apply(RoomCategory::DeluxeSingle, 0, RoomAction::CheckOut).unwrap();

        assert_eq!(report.outcome, Outcome::NotOccupied);
        assert_eq!(report.state, RoomState::Reserved);
        assert!(!report.released);
        assert_eq!(inv.check_availability(RoomCategory::DeluxeSingle), 0);
    }
}

//! Integration tests for allocation and lifecycle-driven slot release.

use innforge_inventory::{Capacities, Inventory, InventoryError, parse_selector};
use innforge_room::{Outcome, PricingPolicy, RoomAction, RoomCategory, RoomState};

// =========================================================================
// Helpers
// =========================================================================

fn book(inv: &mut Inventory, category: RoomCategory) -> Result<usize, InventoryError> {
    inv.book(category, PricingPolicy::Standard).map(|b| b.slot)
}

fn fill(inv: &mut Inventory, category: RoomCategory) {
    for _ in 0..inv.capacity(category) {
        book(inv, category).unwrap();
    }
}

// =========================================================================
// Availability and allocation
// =========================================================================

#[test]
fn test_initial_availability_equals_capacity() {
    let inv = Inventory::default();
    for category in RoomCategory::ALL {
        assert_eq!(inv.check_availability(category), inv.capacity(category));
    }
}

#[test]
fn test_each_booking_takes_exactly_one_slot_in_order() {
    let mut inv = Inventory::default();
    let category = RoomCategory::DeluxeDouble;

    for expected_slot in 0..5 {
        let before = inv.check_availability(category);
        assert_eq!(book(&mut inv, category), Ok(expected_slot));
        assert_eq!(inv.check_availability(category), before - 1);
    }
    assert_eq!(inv.occupied_slots(category), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_pools_are_independent() {
    let mut inv = Inventory::default();
    fill(&mut inv, RoomCategory::LuxuryDouble);

    assert_eq!(inv.check_availability(RoomCategory::LuxuryDouble), 0);
    assert_eq!(inv.check_availability(RoomCategory::DeluxeDouble), 20);
    assert_eq!(inv.check_availability(RoomCategory::LuxurySingle), 10);
    assert_eq!(inv.check_availability(RoomCategory::DeluxeSingle), 20);
}

#[test]
fn test_luxury_double_eleventh_booking_has_no_capacity() {
    let mut inv = Inventory::default();
    let category = RoomCategory::LuxuryDouble;

    for i in 0..10 {
        assert_eq!(book(&mut inv, category), Ok(i));
    }
    assert_eq!(inv.check_availability(category), 0);

    let snapshot = inv.occupied_slots(category);
    assert_eq!(
        book(&mut inv, category),
        Err(InventoryError::NoCapacity(category))
    );
    assert_eq!(inv.occupied_slots(category), snapshot);
    assert_eq!(inv.check_availability(category), 0);
}

#[test]
fn test_out_of_range_selector() {
    assert_eq!(
        parse_selector(5),
        Err(InventoryError::InvalidCategorySelector(5))
    );
}

// =========================================================================
// Lifecycle through the inventory
// =========================================================================

#[test]
fn test_check_in_then_check_out_frees_slot() {
    let mut inv = Inventory::new(Capacities::uniform(3));
    let category = RoomCategory::LuxurySingle;
    book(&mut inv, category).unwrap();

    let report = inv.apply(category, 0, RoomAction::CheckIn).unwrap();
    assert_eq!(report.outcome, Outcome::CheckedIn);
    assert_eq!(report.state, RoomState::Occupied);
    assert!(!report.released);

    let report = inv.apply(category, 0, RoomAction::CheckOut).unwrap();
    assert_eq!(report.outcome, Outcome::CheckedOut);
    assert!(report.released);
    assert!(inv.room(category, 0).is_none());
    assert_eq!(inv.check_availability(category), 3);
}

#[test]
fn test_cancel_frees_slot_and_next_booking_reuses_it() {
    let mut inv = Inventory::new(Capacities::uniform(3));
    let category = RoomCategory::DeluxeSingle;
    for _ in 0..3 {
        book(&mut inv, category).unwrap();
    }

    let report = inv.apply(category, 1, RoomAction::Cancel).unwrap();
    assert_eq!(report.outcome, Outcome::Cancelled);
    assert!(report.released);
    assert_eq!(inv.occupied_slots(category), vec![0, 2]);

    assert_eq!(book(&mut inv, category), Ok(1));
    assert_eq!(inv.check_availability(category), 0);
}

#[test]
fn test_occupied_room_cannot_be_cancelled_or_rebooked() {
    let mut inv = Inventory::new(Capacities::uniform(1));
    let category = RoomCategory::DeluxeDouble;
    book(&mut inv, category).unwrap();
    inv.apply(category, 0, RoomAction::CheckIn).unwrap();

    let cancel = inv.apply(category, 0, RoomAction::Cancel).unwrap();
    let rebook = inv.apply(category, 0, RoomAction::Book).unwrap();

    assert_eq!(cancel.outcome, Outcome::OccupiedCannotCancel);
    assert_eq!(rebook.outcome, Outcome::OccupiedCannotBook);
    assert_eq!(
        inv.room(category, 0).map(|r| r.state()),
        Some(RoomState::Occupied)
    );
    assert_eq!(inv.check_availability(category), 0);
}

#[test]
fn test_released_slot_rejects_further_actions() {
    let mut inv = Inventory::new(Capacities::uniform(1));
    let category = RoomCategory::LuxuryDouble;
    book(&mut inv, category).unwrap();
    inv.apply(category, 0, RoomAction::Cancel).unwrap();

    assert_eq!(
        inv.apply(category, 0, RoomAction::CheckIn),
        Err(InventoryError::EmptySlot { category, slot: 0 })
    );
}

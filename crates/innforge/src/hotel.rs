//! The hotel context: inventory plus notifications.
//!
//! A `Hotel` is an ordinary value. Build as many as you like; they share
//! nothing.

use innforge_inventory::{Booking, Inventory, LifecycleReport, parse_selector};
use innforge_notify::{NotificationHub, Subscriber, SubscriberId};
use innforge_room::{FeatureSet, PricingPolicy, RoomAction, RoomCategory};

use crate::{HotelConfig, InnforgeError};

/// One hotel: its room inventory, its subscribers and its settings.
///
/// Operations take the 1-based category selector the console uses and
/// report an out-of-range selector as
/// [`InventoryError::InvalidCategorySelector`](innforge_inventory::InventoryError::InvalidCategorySelector).
/// Every booking and every freed slot publishes
/// `"Room type {label} availability has changed."` to all subscribers.
#[derive(Debug)]
pub struct Hotel {
    inventory: Inventory,
    hub: NotificationHub,
    config: HotelConfig,
}

impl Hotel {
    pub fn new(config: HotelConfig) -> Self {
        Self {
            inventory: Inventory::new(config.capacities),
            hub: NotificationHub::new(),
            config,
        }
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Adds a subscriber to availability notifications.
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriberId {
        self.hub.subscribe(subscriber)
    }

    /// Removes a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Catalog description for a category.
    pub fn describe(&self, selector: u32) -> Result<&'static str, InnforgeError> {
        Ok(parse_selector(selector)?.catalog_entry())
    }

    /// Number of empty slots in a category.
    pub fn check_availability(&self, selector: u32) -> Result<usize, InnforgeError> {
        let category = parse_selector(selector)?;
        Ok(self.inventory.check_availability(category))
    }

    /// Books an undecorated room at the configured default policy.
    pub fn book(&mut self, selector: u32) -> Result<Booking, InnforgeError> {
        let policy = self.config.default_policy;
        self.book_with(selector, policy, &FeatureSet::new())
    }

    /// Books a room with an explicit policy and extras.
    pub fn book_with(
        &mut self,
        selector: u32,
        policy: PricingPolicy,
        features: &FeatureSet,
    ) -> Result<Booking, InnforgeError> {
        let category = parse_selector(selector)?;
        let booking = self.inventory.book_with(category, policy, features)?;
        self.availability_changed(category);
        Ok(booking)
    }

    /// Drives the lifecycle of the room in `slot` (0-based).
    ///
    /// Publishes an availability change if the slot was released.
    pub fn apply(
        &mut self,
        selector: u32,
        slot: usize,
        action: RoomAction,
    ) -> Result<LifecycleReport, InnforgeError> {
        let category = parse_selector(selector)?;
        let report = self.inventory.apply(category, slot, action)?;
        if report.released {
            self.availability_changed(category);
        }
        Ok(report)
    }

    /// Tells every subscriber. Failed deliveries are logged by the hub and
    /// never undo the booking or release that triggered them.
    fn availability_changed(&mut self, category: RoomCategory) {
        let message = format!("Room type {} availability has changed.", category.label());
        let report = self.hub.publish(&message);
        if !report.is_clean() {
            tracing::warn!(
                %category,
                failed = report.failed.len(),
                "availability change not delivered to every subscriber"
            );
        }
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new(HotelConfig::default())
    }
}

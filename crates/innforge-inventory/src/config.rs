//! Capacity configuration.

use innforge_room::RoomCategory;
use serde::{Deserialize, Serialize};

use crate::InventoryError;

/// Number of slots per category.
///
/// Missing fields fall back to the category's default capacity, so a
/// config file only needs to name the pools it changes:
///
/// ```
/// # use innforge_inventory::Capacities;
/// let caps: Capacities = serde_json::from_str(r#"{ "luxury_double": 2 }"#).unwrap();
/// assert_eq!(caps.luxury_double, 2);
/// assert_eq!(caps.deluxe_double, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacities {
    pub luxury_double: usize,
    pub deluxe_double: usize,
    pub luxury_single: usize,
    pub deluxe_single: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            luxury_double: RoomCategory::LuxuryDouble.default_capacity(),
            deluxe_double: RoomCategory::DeluxeDouble.default_capacity(),
            luxury_single: RoomCategory::LuxurySingle.default_capacity(),
            deluxe_single: RoomCategory::DeluxeSingle.default_capacity(),
        }
    }
}

impl Capacities {
    /// Largest pool a single category may have.
    pub const MAX: usize = 10_000;

    /// The same capacity for every category. Handy in tests.
    pub fn uniform(capacity: usize) -> Self {
        Self {
            luxury_double: capacity,
            deluxe_double: capacity,
            luxury_single: capacity,
            deluxe_single: capacity,
        }
    }

    /// Checks every pool against [`Self::MAX`].
    ///
    /// # Errors
    /// Returns [`InventoryError::CapacityTooLarge`] for the first category
    /// over the limit.
    pub fn validate(&self) -> Result<(), InventoryError> {
        for category in RoomCategory::ALL {
            let capacity = self.get(category);
            if capacity > Self::MAX {
                return Err(InventoryError::CapacityTooLarge {
                    category,
                    capacity,
                    max: Self::MAX,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, category: RoomCategory) -> usize {
        match category {
            RoomCategory::LuxuryDouble => self.luxury_double,
            RoomCategory::DeluxeDouble => self.deluxe_double,
            RoomCategory::LuxurySingle => self.luxury_single,
            RoomCategory::DeluxeSingle => self.deluxe_single,
        }
    }
}

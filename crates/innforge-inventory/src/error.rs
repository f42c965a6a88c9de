//! Error types for the inventory layer.

use innforge_room::RoomCategory;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The console selector does not name a category (valid: 1–4).
    #[error("invalid room type selector: {0}")]
    InvalidCategorySelector(u32),

    /// Every slot in the category is taken.
    #[error("no {0} rooms available")]
    NoCapacity(RoomCategory),

    /// The slot index is past the end of the category's pool.
    #[error("slot {slot} is out of range for {category} (capacity {capacity})")]
    SlotOutOfRange {
        category: RoomCategory,
        slot: usize,
        capacity: usize,
    },

    /// A configured pool is larger than [`Capacities::MAX`](crate::Capacities::MAX).
    #[error("capacity {capacity} for {category} exceeds the maximum of {max}")]
    CapacityTooLarge {
        category: RoomCategory,
        capacity: usize,
        max: usize,
    },

    /// The slot exists but holds no booking.
    #[error("slot {slot} of {category} holds no booking")]
    EmptySlot { category: RoomCategory, slot: usize },
}

/// Maps a 1-based console selector to a category.
///
/// # Errors
/// Returns [`InventoryError::InvalidCategorySelector`] outside 1–4.
pub fn parse_selector(selector: u32) -> Result<RoomCategory, InventoryError> {
    RoomCategory::from_selector(selector).ok_or(InventoryError::InvalidCategorySelector(selector))
}

//! The room factory.
//!
//! The factory only decides the room's shape. Which category a booking
//! counts against is the inventory's business.

use crate::{PricingPolicy, RoomCategory, RoomError, RoomInstance};

/// Builds a room from a category label such as `"luxury double"`.
///
/// Labels are matched case-insensitively.
///
/// # Errors
/// Returns [`RoomError::InvalidRoomLabel`] for any label that is not one
/// of the four category labels.
pub fn create_room(label: &str, policy: PricingPolicy) -> Result<RoomInstance, RoomError> {
    let category = RoomCategory::from_label(label)
        .ok_or_else(|| RoomError::InvalidRoomLabel(label.to_string()))?;
    Ok(create_for(category, policy))
}

/// Builds a room for an already-validated category.
pub fn create_for(category: RoomCategory, policy: PricingPolicy) -> RoomInstance {
    RoomInstance::new(category.shape(), policy)
}

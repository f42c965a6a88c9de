//! Error types for the room layer.

/// Errors that can occur while building rooms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// The factory was given a label that names no room category.
    /// Labels are matched case-insensitively against
    /// [`RoomCategory::label`](crate::RoomCategory::label).
    #[error("invalid room type: {0}")]
    InvalidRoomLabel(String),
}

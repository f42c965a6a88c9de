//! Unified error type for Innforge.

use innforge_inventory::InventoryError;
use innforge_room::RoomError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impls, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum InnforgeError {
    /// A room-level error (unknown room label).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// An inventory-level error (bad selector, no capacity, bad slot).
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Reading input, writing output or reading a config file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`HotelConfig`](crate::HotelConfig).
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

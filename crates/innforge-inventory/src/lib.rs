//! Fixed-capacity room inventory for Innforge.
//!
//! The hotel has four pools of slots, one per [`RoomCategory`]. A slot is
//! either empty or owns exactly one booked [`RoomInstance`]. Booking fills
//! the lowest-numbered empty slot; cancelling or checking out hands the
//! slot back.
//!
//! # Key types
//!
//! - [`Inventory`] — the slot pools and every allocation operation
//! - [`Slot`] — `Empty` or `Occupied(RoomInstance)`
//! - [`Capacities`] — how many slots each category gets
//! - [`Booking`] / [`LifecycleReport`] — what an operation did
//!
//! [`RoomCategory`]: innforge_room::RoomCategory
//! [`RoomInstance`]: innforge_room::RoomInstance

mod config;
mod error;
mod inventory;
mod slot;

pub use config::Capacities;
pub use error::{InventoryError, parse_selector};
pub use inventory::{Booking, Inventory, LifecycleReport};
pub use slot::Slot;

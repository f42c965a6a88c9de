//! # Innforge
//!
//! Console-driven hotel room inventory.
//!
//! A [`Hotel`] owns the room [`Inventory`](innforge_inventory::Inventory)
//! and a [`NotificationHub`](innforge_notify::NotificationHub). The
//! [`Console`] drives a hotel from any line-oriented reader and writer.
//!
//! ## Quick Start
//!
//! ```rust
//! use innforge::prelude::*;
//!
//! let mut hotel = Hotel::new(HotelConfig::default());
//! let booking = hotel.book(1).unwrap();
//! assert_eq!(booking.category, RoomCategory::LuxuryDouble);
//! assert_eq!(hotel.check_availability(1).unwrap(), 9);
//! ```

mod config;
mod console;
mod error;
mod hotel;

pub use config::HotelConfig;
pub use console::{Console, SharedOutput};
pub use error::InnforgeError;
pub use hotel::Hotel;

/// Everything needed to embed a hotel, in one import.
pub mod prelude {
    pub use crate::{Console, Hotel, HotelConfig, InnforgeError, SharedOutput};
    pub use innforge_inventory::{
        Booking, Capacities, Inventory, InventoryError, LifecycleReport,
    };
    pub use innforge_notify::{
        Customer, NotificationHub, NotifyError, PublishReport, Subscriber, SubscriberId,
    };
    pub use innforge_room::{
        Feature, FeatureSet, Outcome, PricingPolicy, RoomAction, RoomCategory, RoomError,
        RoomInstance, RoomShape, RoomState, create_room,
    };
}

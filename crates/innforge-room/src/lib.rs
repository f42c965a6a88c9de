//! Room model for Innforge.
//!
//! Everything that describes a single room lives here: what kind of room
//! it is, how much it costs, which extras it carries, and where it is in
//! its booking lifecycle. Nothing in this crate knows about capacity or
//! slots; that is the inventory's job.
//!
//! # Key types
//!
//! - [`RoomCategory`] — the four bookable categories and their catalog data
//! - [`PricingPolicy`] — maps a base rate to a final rate
//! - [`Feature`] / [`FeatureSet`] — additive extras (Wi-Fi, breakfast)
//! - [`RoomInstance`] — one built room: shape + features + policy + state
//! - [`RoomState`] / [`RoomAction`] / [`Outcome`] — the lifecycle machine
//! - [`create_room`] / [`create_for`] — the room factory

mod category;
mod error;
mod factory;
mod feature;
mod lifecycle;
mod pricing;
mod room;

pub use category::{RoomCategory, RoomShape};
pub use error::RoomError;
pub use factory::{create_for, create_room};
pub use feature::{Feature, FeatureSet};
pub use lifecycle::{Outcome, RoomAction, RoomState, transition};
pub use pricing::PricingPolicy;
pub use room::RoomInstance;

//! Availability notifications for Innforge.
//!
//! A [`NotificationHub`] keeps an ordered list of [`Subscriber`]s and fans
//! each published message out to all of them, synchronously and in
//! subscription order.
//!
//! ```text
//! Hotel (above)  ← publishes "Room type X availability has changed."
//!     ↓
//! NotificationHub (this crate)  ← ordered fan-out, failure accounting
//!     ↓
//! Subscriber impls  ← Customer, closures, test recorders
//! ```

mod error;
mod hub;
mod subscriber;

pub use error::NotifyError;
pub use hub::{NotificationHub, PublishReport, SubscriberId};
pub use subscriber::{Customer, Subscriber};

//! The `Subscriber` trait and the stock `Customer` subscriber.

use std::io::Write;

use crate::NotifyError;

/// Something that wants to hear about availability changes.
///
/// Closures of the right shape are subscribers too, which keeps tests
/// short:
///
/// ```
/// use innforge_notify::{NotificationHub, NotifyError};
///
/// let mut hub = NotificationHub::new();
/// hub.subscribe(Box::new(|msg: &str| -> Result<(), NotifyError> {
///     println!("{msg}");
///     Ok(())
/// }));
/// ```
pub trait Subscriber {
    /// Receives one published message.
    fn notify(&mut self, message: &str) -> Result<(), NotifyError>;
}

impl<F> Subscriber for F
where
    F: FnMut(&str) -> Result<(), NotifyError>,
{
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        self(message)
    }
}

/// A named guest who prints notifications to a writer.
///
/// Output format: `Notification for {name}: {message}`.
pub struct Customer<W: Write> {
    name: String,
    sink: W,
}

impl<W: Write> Customer<W> {
    pub fn new(name: impl Into<String>, sink: W) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the customer and hands back the writer.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Subscriber for Customer<W> {
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        writeln!(self.sink, "Notification for {}: {}", self.name, message).map_err(|e| {
            NotifyError::Delivery {
                subscriber: self.name.clone(),
                reason: e.to_string(),
            }
        })
    }
}

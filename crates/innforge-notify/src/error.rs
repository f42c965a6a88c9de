//! Error types for the notification layer.

/// Errors a subscriber can report back to the hub.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// The subscriber could not take delivery of the message.
    /// The hub logs it and carries on with the remaining subscribers.
    #[error("delivery to {subscriber} failed: {reason}")]
    Delivery { subscriber: String, reason: String },
}

//! The notification hub: an ordered subscriber registry with fan-out.

use std::fmt;

use crate::{NotifyError, Subscriber};

/// Handle returned by [`NotificationHub::subscribe`], used to unsubscribe.
///
/// Ids are unique per hub and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// What happened during one [`NotificationHub::publish`] call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Subscribers that accepted the message.
    pub delivered: usize,
    /// Subscribers that returned an error, in delivery order.
    pub failed: Vec<(SubscriberId, NotifyError)>,
}

impl PublishReport {
    /// Returns `true` if every subscriber took delivery.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Registry of subscribers notified when availability changes.
///
/// Delivery is synchronous and follows subscription order. A subscriber
/// that returns an error does not stop the fan-out; its failure is logged
/// and recorded in the [`PublishReport`].
#[derive(Default)]
pub struct NotificationHub {
    subscribers: Vec<(SubscriberId, Box<dyn Subscriber>)>,
    next_id: u64,
}

impl NotificationHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber at the end of the delivery order.
    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriberId {
        self.next_id += 1;
        let id = SubscriberId(self.next_id);
        self.subscribers.push((id, subscriber));
        tracing::debug!(subscriber = %id, "subscribed");
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::debug!(subscriber = %id, "unsubscribed");
        }
        removed
    }

    /// Delivers `message` to every current subscriber, in order.
    pub fn publish(&mut self, message: &str) -> PublishReport {
        let mut report = PublishReport::default();

        for (id, subscriber) in &mut self.subscribers {
            match subscriber.notify(message) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(subscriber = %id, error = %e, "notification not delivered");
                    report.failed.push((*id, e));
                }
            }
        }

        tracing::debug!(
            delivered = report.delivered,
            failed = report.failed.len(),
            "notification published"
        );
        report
    }

    /// Number of current subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<SubscriberId> = self.subscribers.iter().map(|(id, _)| *id).collect();
        f.debug_struct("NotificationHub")
            .field("subscribers", &ids)
            .finish()
    }
}

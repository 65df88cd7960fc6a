//! Scoped refresh signaling between pages.

use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 16;

/// Broadcasts "reload your records" notifications to live subscribers.
///
/// A bus is created per application scope and handed to the pages that
/// need it; dropping a [`RefreshSignal`] unsubscribes it. Topics name
/// the collection that changed ("menus", "restaurants", ...).
#[derive(Debug, Clone)]
pub struct RefreshBus {
    tx: broadcast::Sender<String>,
}

impl RefreshBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribes to future notifications. Notifications sent before
    /// the call are not delivered.
    #[must_use]
    pub fn subscribe(&self) -> RefreshSignal {
        RefreshSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Notifies current subscribers that `topic` changed.
    /// A notification with no subscribers is dropped silently.
    pub fn notify(&self, topic: &str) {
        let delivered = self.tx.send(topic.to_string()).unwrap_or(0);
        debug!(topic, delivered, "refresh notification");
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}

/// One page's subscription to refresh notifications.
pub struct RefreshSignal {
    rx: broadcast::Receiver<String>,
}

impl RefreshSignal {
    /// Waits for the next notification.
    ///
    /// Returns `None` when the bus has been dropped. A subscriber that
    /// lagged behind skips the overwritten notifications and resumes
    /// with the oldest one still buffered.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            match self.rx.recv().await {
                Ok(topic) => return Some(topic),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

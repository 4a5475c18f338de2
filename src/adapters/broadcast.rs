//! Event channel backed by a tokio broadcast channel.
//!
//! `send` on a broadcast channel never waits for receivers, so publishing
//! cannot stall a reservation. Receivers that fall behind by more than the
//! channel capacity skip the oldest events and observe `RecvError::Lagged`.

use crate::domain::ReservationEvent;
use crate::ports::event_publisher::EventPublisher;
use tokio::sync::broadcast;

/// Default buffer size for the reservation event channel.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 256;

/// Receiver handle for reservation events.
pub type ReservationEventReceiver = broadcast::Receiver<ReservationEvent>;

/// Fan-out channel for reservation events.
#[derive(Clone)]
pub struct EventChannel {
    sender: broadcast::Sender<ReservationEvent>,
}

impl EventChannel {
    /// Create a channel buffering up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events published after this call.
    pub fn subscribe(&self) -> ReservationEventReceiver {
        self.sender.subscribe()
    }
}

impl EventPublisher for EventChannel {
    fn publish(&self, event: ReservationEvent) {
        let kind = event.kind();
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(kind, receivers, "Event published"),
            // No subscribers is not a failure
            Err(_) => tracing::trace!(kind, "Event dropped, no subscribers"),
        }
    }
}

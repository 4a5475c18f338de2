use crate::domain::ReservationEvent;
use crate::ports::event_publisher::EventPublisher as EventPublisherTrait;
use std::sync::{Mutex, PoisonError};

/// Mock implementation of EventPublisher
///
/// Records every published event in order so tests can assert on
/// what the coordinator emitted.
#[derive(Default)]
pub struct EventPublisher {
    events: Mutex<Vec<ReservationEvent>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events published so far
    pub fn events(&self) -> Vec<ReservationEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Count events of the given kind (see `ReservationEvent::kind`)
    pub fn count(&self, kind: &str) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }
}

impl EventPublisherTrait for EventPublisher {
    fn publish(&self, event: ReservationEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

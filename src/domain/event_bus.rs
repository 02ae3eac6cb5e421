//! Fan-out of reservation changes to WebSocket clients.
//!
//! The service publishes one [`ReservationEvent`] per successful create,
//! status change, or cancel. Each `/ws` connection holds its own receiver
//! and drops events for rooms it has not subscribed to, so the bus itself
//! carries every room's traffic unfiltered.

use tokio::sync::broadcast;

use super::ReservationEvent;

/// Broadcast bus for [`ReservationEvent`]s.
///
/// Connections that fall more than `capacity` events behind skip the oldest
/// ones and see a `Lagged` error on their next receive.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ReservationEvent>,
}

impl EventBus {
    /// Creates a bus buffering up to `capacity` events per receiver.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes a reservation change to every connected client.
    ///
    /// Returns the number of receivers reached. With no client connected the
    /// event is dropped; reservations themselves live in the store.
    pub fn publish(&self, event: ReservationEvent) -> usize {
        let event_type = event.event_type_str();
        let room_id = event.room_id().to_string();
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(event_type, room_id = %room_id, delivered, "reservation event published");
        delivered
    }

    /// Registers a new connection; it sees events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ReservationEvent> {
        self.sender.subscribe()
    }

    /// Number of live connections listening on the bus.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

//! Domain events reflecting reservation changes.
//!
//! Every successful mutation emits a [`ReservationEvent`] through the
//! [`super::EventBus`]. Events are forwarded to WebSocket subscribers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReservationId;
use super::reservation::{Reservation, ReservationStatus};

/// Domain event emitted after every reservation mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ReservationEvent {
    /// Emitted when a reservation is created.
    ReservationCreated {
        /// The stored reservation.
        reservation: Reservation,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reservation changes status without being removed.
    ReservationStatusChanged {
        /// Reservation identifier.
        reservation_id: ReservationId,
        /// Booked room.
        room_id: String,
        /// Status before the change.
        from: ReservationStatus,
        /// Status after the change.
        to: ReservationStatus,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reservation is cancelled and removed.
    ReservationCancelled {
        /// Reservation identifier.
        reservation_id: ReservationId,
        /// Booked room.
        room_id: String,
        /// Emission timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl ReservationEvent {
    /// Returns the room the event concerns.
    #[must_use]
    pub fn room_id(&self) -> &str {
        match self {
            Self::ReservationCreated { reservation, .. } => &reservation.room_id,
            Self::ReservationStatusChanged { room_id, .. }
            | Self::ReservationCancelled { room_id, .. } => room_id,
        }
    }

    /// Returns the reservation the event concerns.
    #[must_use]
    pub fn reservation_id(&self) -> &ReservationId {
        match self {
            Self::ReservationCreated { reservation, .. } => &reservation.id,
            Self::ReservationStatusChanged { reservation_id, .. }
            | Self::ReservationCancelled { reservation_id, .. } => reservation_id,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::ReservationCreated { .. } => "reservation_created",
            Self::ReservationStatusChanged { .. } => "reservation_status_changed",
            Self::ReservationCancelled { .. } => "reservation_cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cancelled(room_id: &str) -> ReservationEvent {
        ReservationEvent::ReservationCancelled {
            reservation_id: ReservationId::from_sequence(1),
            room_id: room_id.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn cancelled_event_type() {
        assert_eq!(cancelled("1").event_type_str(), "reservation_cancelled");
    }

    #[test]
    fn status_change_serializes_tagged() {
        let event = ReservationEvent::ReservationStatusChanged {
            reservation_id: ReservationId::from_sequence(4),
            room_id: "2".to_string(),
            from: ReservationStatus::Confirmed,
            to: ReservationStatus::Completed,
            timestamp: Utc::now(),
        };
        let json_str = serde_json::to_string(&event).unwrap_or_default();
        assert!(json_str.contains("\"event_type\":\"reservation_status_changed\""));
        assert!(json_str.contains("\"to\":\"completed\""));
        assert!(json_str.contains("RES-000004"));
    }

    #[test]
    fn accessors() {
        let event = cancelled("3");
        assert_eq!(event.room_id(), "3");
        assert_eq!(event.reservation_id(), &ReservationId::from_sequence(1));
    }
}

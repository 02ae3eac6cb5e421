//! Reservation service: orchestrates store operations and emits events.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    EventBus, InventoryCatalog, Reservation, ReservationEvent, ReservationId, ReservationInput,
    ReservationStatus, ReservationStore, Room, StatusUpdate,
};
use crate::error::GatewayError;

/// Orchestration layer for all room and reservation operations.
///
/// Owns references to the [`InventoryCatalog`] and [`ReservationStore`] for
/// state and to the [`EventBus`] for event emission. Every mutation follows
/// the pattern: call the store → log → emit event → return result.
#[derive(Debug, Clone)]
pub struct ReservationService {
    catalog: Arc<InventoryCatalog>,
    store: Arc<ReservationStore>,
    event_bus: EventBus,
}

impl ReservationService {
    /// Creates a new `ReservationService`.
    #[must_use]
    pub fn new(store: Arc<ReservationStore>, event_bus: EventBus) -> Self {
        Self {
            catalog: Arc::clone(store.catalog()),
            store,
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`ReservationStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<ReservationStore> {
        &self.store
    }

    /// Returns every room in catalog order.
    #[must_use]
    pub fn list_rooms(&self) -> &[Room] {
        self.catalog.list_rooms()
    }

    /// Returns a single room.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::RoomNotFound`] if the room is not in the
    /// catalog.
    pub fn get_room(&self, room_id: &str) -> Result<&Room, GatewayError> {
        self.catalog
            .get(room_id)
            .ok_or_else(|| GatewayError::RoomNotFound(room_id.to_string()))
    }

    /// Returns all live reservations in creation order.
    pub async fn list_reservations(&self) -> Vec<Reservation> {
        self.store.list().await
    }

    /// Returns a single live reservation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReservationNotFound`] if it does not exist.
    pub async fn get_reservation(&self, id: &ReservationId) -> Result<Reservation, GatewayError> {
        self.store.get(id).await
    }

    /// Creates a reservation and emits `ReservationCreated`.
    ///
    /// # Errors
    ///
    /// Propagates the store's validation, not-found, and conflict errors.
    pub async fn create_reservation(
        &self,
        input: ReservationInput,
    ) -> Result<Reservation, GatewayError> {
        let reservation = self.store.create(input).await?;

        tracing::info!(
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            nights = reservation.nights(),
            "reservation created"
        );
        let _ = self.event_bus.publish(ReservationEvent::ReservationCreated {
            reservation: reservation.clone(),
            timestamp: Utc::now(),
        });
        Ok(reservation)
    }

    /// Cancels a reservation and emits `ReservationCancelled`.
    ///
    /// Returns the reservation as it was before cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReservationNotFound`] if it does not exist or
    /// was already cancelled.
    pub async fn cancel_reservation(&self, id: &ReservationId) -> Result<Reservation, GatewayError> {
        let reservation = self.store.cancel(id).await?;

        tracing::info!(reservation_id = %id, room_id = %reservation.room_id, "reservation cancelled");
        self.publish_cancelled(&reservation);
        Ok(reservation)
    }

    /// Changes a reservation's status and emits the matching event.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ReservationNotFound`] or
    /// [`GatewayError::InvalidStatusTransition`] from the store.
    pub async fn update_status(
        &self,
        id: &ReservationId,
        status: ReservationStatus,
    ) -> Result<Reservation, GatewayError> {
        let StatusUpdate {
            previous,
            reservation,
        } = self.store.update_status(id, status).await?;

        match (previous, reservation.status) {
            (_, ReservationStatus::Cancelled) => {
                tracing::info!(reservation_id = %id, "reservation cancelled via status update");
                self.publish_cancelled(&reservation);
            }
            (from, to) if from != to => {
                tracing::info!(reservation_id = %id, %from, %to, "reservation status changed");
                let _ = self
                    .event_bus
                    .publish(ReservationEvent::ReservationStatusChanged {
                        reservation_id: id.clone(),
                        room_id: reservation.room_id.clone(),
                        from,
                        to,
                        timestamp: Utc::now(),
                    });
            }
            _ => {}
        }
        Ok(reservation)
    }

    /// Loads sample reservations into the store.
    pub async fn seed(&self, inputs: Vec<ReservationInput>) -> usize {
        let seeded = self.store.seed(inputs).await;
        tracing::info!(count = seeded.len(), "sample reservations loaded");
        seeded.len()
    }

    fn publish_cancelled(&self, reservation: &Reservation) {
        let _ = self
            .event_bus
            .publish(ReservationEvent::ReservationCancelled {
                reservation_id: reservation.id.clone(),
                room_id: reservation.room_id.clone(),
                timestamp: Utc::now(),
            });
    }
}

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::ReservationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reservation service for all business logic.
    pub reservation_service: Arc<ReservationService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Builds the state around a service, sharing the service's event bus.
    #[must_use]
    pub fn new(reservation_service: Arc<ReservationService>) -> Self {
        let event_bus = reservation_service.event_bus().clone();
        Self {
            reservation_service,
            event_bus,
        }
    }
}

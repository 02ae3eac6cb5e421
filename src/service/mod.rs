//! Service layer: business logic orchestration.
//!
//! The service coordinates between the domain layer (catalog, store,
//! event bus) and the API/WebSocket layers.

pub mod reservation_service;

pub use reservation_service::ReservationService;

//! Domain layer: room catalog, reservation store, and event system.
//!
//! The catalog is immutable after startup; the reservation store is the
//! only component holding mutable state.

pub mod catalog;
pub mod event_bus;
pub mod reservation;
pub mod reservation_event;
pub mod reservation_id;
pub mod reservation_store;
pub mod room;

pub use catalog::InventoryCatalog;
pub use event_bus::EventBus;
pub use reservation::{Reservation, ReservationInput, ReservationStatus};
pub use reservation_event::ReservationEvent;
pub use reservation_id::ReservationId;
pub use reservation_store::{ReservationStore, StatusUpdate};
pub use room::Room;

//! # hotel-booking-gateway
//!
//! REST API and WebSocket gateway for a hotel-booking demo: a read-only
//! room catalog and an in-memory reservation store.
//!
//! The reservation store is the only stateful component. It is safe for
//! concurrent use: ids come from a counter advanced under the store's write
//! lock, and cancellations race to exactly one winner. Nothing is persisted;
//! all reservations are lost when the process exits.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── ReservationService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── ReservationStore (domain/)
//!     └── InventoryCatalog (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod router;
pub mod service;
pub mod ws;

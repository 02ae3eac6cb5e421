//! Data Transfer Objects for REST request/response serialization.
//!
//! Rooms and reservations serialize directly from their domain types; the
//! DTOs here cover request bodies and responses with no domain counterpart.

pub mod reservation_dto;
pub mod system_dto;

pub use reservation_dto::*;
pub use system_dto::*;

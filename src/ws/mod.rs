//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams reservation events to clients
//! subscribed to the affected rooms.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;

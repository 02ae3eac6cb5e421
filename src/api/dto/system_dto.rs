//! System endpoint responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// RFC 3339 server time.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Rooms in the catalog.
    pub rooms: usize,
    /// Live reservations.
    pub reservations: usize,
}

//! Reservation request bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ReservationStatus;

/// Request body for `PATCH /reservations/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// Target status: `confirmed`, `completed` or `cancelled`.
    pub status: ReservationStatus,
}

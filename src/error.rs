//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and a JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ReservationId, ReservationStatus};

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "room not found: 999" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Kind        | Variants                                      | HTTP Status |
/// |-------------|-----------------------------------------------|-------------|
/// | Validation  | `InvalidRequest`                              | 400         |
/// | Not found   | `RoomNotFound`, `ReservationNotFound`         | 404         |
/// | Conflict    | `RoomUnavailable`, `InvalidStatusTransition`  | 409         |
/// | Server      | `Internal`                                    | 500         |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Room with the given ID is not in the catalog.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// Reservation with the given ID does not exist or was cancelled.
    #[error("reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// Room exists but is not open for booking.
    #[error("room {0} is not available for booking")]
    RoomUnavailable(String),

    /// The requested status change is not allowed.
    #[error("cannot change reservation status from {from} to {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: ReservationStatus,
        /// Requested status.
        to: ReservationStatus,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::RoomNotFound(_) | Self::ReservationNotFound(_) => StatusCode::NOT_FOUND,
            Self::RoomUnavailable(_) | Self::InvalidStatusTransition { .. } => {
                StatusCode::CONFLICT
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

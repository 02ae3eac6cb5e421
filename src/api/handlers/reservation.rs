//! Reservation handlers: create, list, get, update status, cancel.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};

use crate::api::dto::UpdateStatusRequest;
use crate::app_state::AppState;
use crate::domain::{Reservation, ReservationId, ReservationInput};
use crate::error::{ErrorResponse, GatewayError};

/// `POST /reservations` — Book a room.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a malformed body,
/// [`GatewayError::RoomNotFound`] for an unknown room and
/// [`GatewayError::RoomUnavailable`] for a room closed to booking.
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "Create a reservation",
    description = "Validates the booking, assigns a fresh id, derives the total price from the room's nightly rate, and stores the reservation as `confirmed`.",
    request_body = ReservationInput,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 409, description = "Room not available", body = ErrorResponse),
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationInput>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(input) = payload?;
    let reservation = state.reservation_service.create_reservation(input).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// `GET /reservations` — List live reservations in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    summary = "List reservations",
    responses(
        (status = 200, description = "Live reservations", body = Vec<Reservation>),
    )
)]
pub async fn list_reservations(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.reservation_service.list_reservations().await)
}

/// `GET /reservations/{id}` — Get a single reservation.
///
/// # Errors
///
/// Returns [`GatewayError::ReservationNotFound`] if it does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    summary = "Get reservation",
    params(
        ("id" = String, Path, description = "Reservation id"),
    ),
    responses(
        (status = 200, description = "Reservation details", body = Reservation),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let reservation = state
        .reservation_service
        .get_reservation(&ReservationId::from(id))
        .await?;
    Ok(Json(reservation))
}

/// `PATCH /reservations/{id}/status` — Change a reservation's status.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a malformed body,
/// [`GatewayError::ReservationNotFound`] or
/// [`GatewayError::InvalidStatusTransition`].
#[utoipa::path(
    patch,
    path = "/api/v1/reservations/{id}/status",
    tag = "Reservations",
    summary = "Update reservation status",
    description = "`confirmed → completed` is allowed. Setting `cancelled` removes the reservation like DELETE.",
    params(
        ("id" = String, Path, description = "Reservation id"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated reservation", body = Reservation),
        (status = 400, description = "Malformed status", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse),
    )
)]
pub async fn update_reservation_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload?;
    let reservation = state
        .reservation_service
        .update_status(&ReservationId::from(id), req.status)
        .await?;
    Ok(Json(reservation))
}

/// `DELETE /reservations/{id}` — Cancel a reservation.
///
/// # Errors
///
/// Returns [`GatewayError::ReservationNotFound`] if it does not exist or
/// was already cancelled.
#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    summary = "Cancel a reservation",
    description = "Removes the reservation and emits a reservation_cancelled event.",
    params(
        ("id" = String, Path, description = "Reservation id"),
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .reservation_service
        .cancel_reservation(&ReservationId::from(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reservation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(list_reservations).post(create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(get_reservation).delete(cancel_reservation),
        )
        .route("/reservations/{id}/status", patch(update_reservation_status))
}

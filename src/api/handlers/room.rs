//! Room inventory handlers: list and get.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::Room;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /rooms` — List the room catalog.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    summary = "List rooms",
    description = "Returns every room in the catalog, in catalog order.",
    responses(
        (status = 200, description = "Room catalog", body = Vec<Room>),
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.reservation_service.list_rooms().to_vec())
}

/// `GET /rooms/{id}` — Get a single room.
///
/// # Errors
///
/// Returns [`GatewayError::RoomNotFound`] if the room does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    summary = "Get room",
    params(
        ("id" = String, Path, description = "Room id"),
    ),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found", body = ErrorResponse),
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let room = state.reservation_service.get_room(&id)?.clone();
    Ok(Json(room))
}

/// Room routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/{id}", get(get_room))
}

//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "hotel-booking-gateway",
        description = "Room inventory and reservation API for the hotel-booking demo."
    ),
    paths(
        handlers::room::list_rooms,
        handlers::room::get_room,
        handlers::reservation::list_reservations,
        handlers::reservation::create_reservation,
        handlers::reservation::get_reservation,
        handlers::reservation::update_reservation_status,
        handlers::reservation::cancel_reservation,
        handlers::system::health_handler,
    ),
    components(schemas(
        crate::domain::Room,
        crate::domain::Reservation,
        crate::domain::ReservationInput,
        crate::domain::ReservationStatus,
        crate::domain::ReservationId,
        dto::UpdateStatusRequest,
        dto::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "Rooms", description = "Read-only room catalog"),
        (name = "Reservations", description = "Create, inspect, and cancel reservations"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
        .merge(docs_routes())
}

#[cfg(feature = "swagger-ui")]
fn docs_routes() -> Router<AppState> {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(not(feature = "swagger-ui"))]
fn docs_routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

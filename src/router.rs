//! Full application router: REST API, WebSocket, static assets, CORS.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::GatewayConfig;
use crate::ws::handler::ws_handler;

/// Builds the application router with all middleware applied.
pub fn build_app(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origin))
        .with_state(state)
}

/// CORS policy for the configured origin. `*` allows any origin without
/// credentials; an unparseable origin allows none. Requests from any other
/// origin get no `Access-Control-Allow-Origin` header.
fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    let Ok(origin_value) = HeaderValue::from_str(origin) else {
        tracing::warn!(origin, "invalid CORS origin, cross-origin requests disabled");
        return CorsLayer::new();
    };
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin_value]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{EventBus, InventoryCatalog, ReservationStore};
    use crate::service::ReservationService;

    fn make_app() -> Router {
        let catalog = Arc::new(InventoryCatalog::with_default_rooms("http://localhost:8080"));
        let store = Arc::new(ReservationStore::new(catalog));
        let service = Arc::new(ReservationService::new(store, EventBus::new(16)));
        build_app(AppState::new(service), &GatewayConfig::default())
    }

    fn get_request(uri: &str, origin: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        let Ok(request) = builder.body(Body::empty()) else {
            panic!("invalid request");
        };
        request
    }

    #[tokio::test]
    async fn rooms_are_served_under_api_v1() {
        let Ok(response) = make_app().oneshot(get_request("/api/v1/rooms", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_room_is_404() {
        let Ok(response) = make_app()
            .oneshot(get_request("/api/v1/rooms/999", None))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let Ok(response) = make_app()
            .oneshot(get_request("/health", Some("http://localhost:3000")))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[tokio::test]
    async fn other_origin_gets_no_cors_header() {
        let Ok(response) = make_app()
            .oneshot(get_request("/health", Some("http://evil.example")))
            .await;
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let Ok(response) = make_app()
            .oneshot(get_request("/api-docs/openapi.json", None))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

//! Shared helpers for integration tests: spawns a gateway on an ephemeral
//! port.

#![allow(clippy::panic, dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use hotel_booking_gateway::app_state::AppState;
use hotel_booking_gateway::config::GatewayConfig;
use hotel_booking_gateway::domain::{EventBus, InventoryCatalog, ReservationStore};
use hotel_booking_gateway::router::build_app;
use hotel_booking_gateway::service::ReservationService;

/// Starts a server with an empty store and returns its address.
pub async fn spawn_gateway() -> SocketAddr {
    let config = GatewayConfig::default();
    let catalog = Arc::new(InventoryCatalog::with_default_rooms(&config.public_base_url));
    let store = Arc::new(ReservationStore::new(catalog));
    let service = Arc::new(ReservationService::new(store, EventBus::new(64)));
    let app = build_app(AppState::new(service), &config);

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// A valid booking body for room `"1"`.
pub fn booking(guest: &str) -> serde_json::Value {
    serde_json::json!({
        "roomId": "1",
        "guestName": guest,
        "email": "guest@mail.com",
        "phone": "123",
        "guests": 2,
        "specialRequests": "late checkout",
        "checkIn": "2025-12-01",
        "checkOut": "2025-12-03",
        "totalPrice": 1
    })
}

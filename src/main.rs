//! hotel-booking-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST, WebSocket, and static asset
//! endpoints.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hotel_booking_gateway::app_state::AppState;
use hotel_booking_gateway::config::GatewayConfig;
use hotel_booking_gateway::domain::reservation_store::sample_reservations;
use hotel_booking_gateway::domain::{EventBus, InventoryCatalog, ReservationStore};
use hotel_booking_gateway::router::build_app;
use hotel_booking_gateway::service::ReservationService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting hotel-booking-gateway");

    // Build domain layer
    let catalog = Arc::new(InventoryCatalog::with_default_rooms(&config.public_base_url));
    let store = Arc::new(ReservationStore::new(catalog));
    let event_bus = EventBus::new(config.event_bus_capacity);

    // Build service layer
    let reservation_service = Arc::new(ReservationService::new(store, event_bus));
    if config.seed_sample_reservations {
        reservation_service.seed(sample_reservations()).await;
    }
    tracing::warn!("reservations are kept in memory only and are lost on shutdown");

    // Build router
    let app = build_app(AppState::new(reservation_service), &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

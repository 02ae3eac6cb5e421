//! Gateway configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). The catalog and reservation store never read the
//! environment; only `main` does, through [`GatewayConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `127.0.0.1:8080`).
    pub listen_addr: SocketAddr,

    /// Origin allowed by CORS. `*` allows any origin.
    pub cors_allowed_origin: String,

    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,

    /// Public base URL used to build room image links.
    pub public_base_url: String,

    /// Whether to load the demo's sample reservations at startup.
    pub seed_sample_reservations: bool,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_allowed_origin: "http://localhost:3000".to_string(),
            assets_dir: PathBuf::from("./assets"),
            public_base_url: "http://localhost:8080".to_string(),
            seed_sample_reservations: true,
            event_bus_capacity: 1024,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        Ok(Self {
            listen_addr,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            public_base_url: std::env::var("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            seed_sample_reservations: parse_env_bool(
                "SEED_SAMPLE_RESERVATIONS",
                defaults.seed_sample_reservations,
            ),
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", defaults.event_bus_capacity),
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .as_deref()
        .and_then(parse_bool)
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

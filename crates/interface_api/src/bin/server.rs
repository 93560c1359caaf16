//! Insurance Portal - API Server Binary
//!
//! This binary starts the HTTP API server for the portal core.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin portal-api
//!
//! # Run with environment variables
//! PORTAL_HOST=0.0.0.0 PORTAL_PORT=8080 cargo run --bin portal-api
//! ```
//!
//! # Environment Variables
//!
//! * `PORTAL_HOST` - Server host (default: 0.0.0.0)
//! * `PORTAL_PORT` - Server port (default: 8080)
//! * `PORTAL_JWT_SECRET` - JWT signing secret (required in production)
//! * `PORTAL_JWT_EXPIRATION_SECS` - Token expiration in seconds (default: 3600)
//! * `PORTAL_ROLE_STORE_URL` - Base URL of the remote role store; an empty
//!   in-memory store (deny everyone) is used when unset
//! * `PORTAL_ROLE_FALLBACK` - "deny" (default) or a role to assume when the
//!   role lookup fails ("customer" reproduces the legacy behavior)
//! * `PORTAL_LOG_LEVEL` - Log level: trace, debug, info, warn, error

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_access::{AccessGate, RoleStore};
use infra_clients::{HttpRoleStore, InMemoryProfileCatalog, InMemoryRoleStore, RecordingSubmitter};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires the collaborator
/// clients, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        fallback = ?config.fallback_policy(),
        "Starting Insurance Portal API Server"
    );

    let state = build_state(config.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("PORTAL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("PORTAL_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        jwt_secret: std::env::var("PORTAL_JWT_SECRET")
            .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
        jwt_expiration_secs: std::env::var("PORTAL_JWT_EXPIRATION_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600),
        role_store_url: std::env::var("PORTAL_ROLE_STORE_URL").ok(),
        role_fallback: std::env::var("PORTAL_ROLE_FALLBACK")
            .unwrap_or_else(|_| "deny".to_string()),
        log_level: std::env::var("PORTAL_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Wires the gate and collaborator clients into the shared state.
fn build_state(config: ApiConfig) -> AppState {
    let role_store: Arc<dyn RoleStore> = match &config.role_store_url {
        Some(url) => {
            tracing::info!(%url, "Using remote role store");
            Arc::new(HttpRoleStore::new(reqwest::Client::new(), url.clone()))
        }
        None => {
            tracing::warn!("No role store configured; all lookups will fall back");
            Arc::new(InMemoryRoleStore::new())
        }
    };

    let gate = AccessGate::new(role_store).with_fallback(config.fallback_policy());

    AppState {
        gate,
        profiles: Arc::new(InMemoryProfileCatalog::seeded()),
        submitter: Arc::new(RecordingSubmitter::new()),
        config,
    }
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

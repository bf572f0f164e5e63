//! Contact API Server Binary
//!
//! Starts the HTTP server for the dual-backend contact service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin contact-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=3000 DATABASE_URL=mysql://... cargo run --bin contact-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` / `PORT` - Server port (default: 3000)
//! * `DATABASE_URL` - MySQL connection string; assembled from `MYSQL_HOST`,
//!   `MYSQL_USER`, `MYSQL_PASSWORD` and `MYSQL_DATABASE` when unset
//! * `FRESHSALES_DOMAIN` - Hosted CRM tenant domain
//! * `FRESHSALES_API_KEY` - CRM API key
//! * `API_CRM_BASE_URL` - Explicit CRM base URL, overrides the tenant domain
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_contact::CrmContactAdapter;
use infra_db::{create_pool, ensure_schema, DatabaseConfig, MySqlContactAdapter};
use interface_api::{config::ApiConfig, create_router, AppState, BackendRegistry};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, establishes the database pool,
/// wires both contact backends, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Database connection or schema bootstrap fails
/// - The CRM client cannot be constructed
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Contact API Server"
    );

    // Create database connection pool and bootstrap the contacts table
    let pool = create_pool(DatabaseConfig::new(&config.database_url))
        .await
        .context("failed to create database pool")?;
    ensure_schema(&pool)
        .await
        .context("failed to bootstrap database schema")?;

    // Wire the two contact backends
    let crm = CrmContactAdapter::new(config.crm_config()).context("failed to build CRM client")?;
    let backends = BackendRegistry::new(Arc::new(crm), Arc::new(MySqlContactAdapter::new(pool.clone())));

    // Create the API router
    let app = create_router(AppState { backends, pool });

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Tries the `API_`-prefixed block first, then falls back to the individual
/// deployment variables (`PORT`, `MYSQL_*`, `FRESHSALES_*`), then to
/// defaults.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000),
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("API_DATABASE_URL"))
            .unwrap_or_else(|_| database_url_from_parts()),
        crm_tenant_domain: std::env::var("FRESHSALES_DOMAIN")
            .unwrap_or_else(|_| "example".to_string()),
        crm_api_key: std::env::var("FRESHSALES_API_KEY").unwrap_or_default(),
        crm_base_url: std::env::var("API_CRM_BASE_URL").ok(),
        crm_timeout_secs: std::env::var("API_CRM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Assembles a MySQL URL from the individual connection settings.
fn database_url_from_parts() -> String {
    let host = std::env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string());
    let user = std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("MYSQL_PASSWORD").unwrap_or_default();
    let database = std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "contacts".to_string());
    DatabaseConfig::from_parts(&host, &user, &password, &database).url
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
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

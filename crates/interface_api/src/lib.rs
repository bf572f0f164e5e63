//! HTTP API Layer
//!
//! This crate provides the REST contact API using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One handler per contact operation plus health checks
//! - **Dispatch**: Per-request backend selection via [`BackendRegistry`]
//! - **Middleware**: Request logging, tracing, request ids
//! - **DTOs**: Request data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, BackendRegistry};
//!
//! let state = AppState { backends, pool };
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use infra_db::DatabasePool;

use crate::handlers::{contact, health};

pub use dispatch::BackendRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The two contact backends, resolved per request by `data_store`
    pub backends: BackendRegistry,
    /// Database connection pool, held for readiness checks
    pub pool: DatabasePool,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Application state holding the backend registry and pool
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // The contact resource keeps its original verb-style paths; the method
    // carries the CRUD intent, the path names the operation.
    let contact_routes = Router::new()
        .route("/createContact", post(contact::create_contact))
        .route("/getContact", post(contact::get_contact))
        .route("/updateContact", put(contact::update_contact))
        .route("/deleteContact", delete(contact::delete_contact));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api/contacts", contact_routes)
        .layer(axum_middleware::from_fn(middleware::request_log_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

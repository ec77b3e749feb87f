//! HTTP API layer with Axum routes.
//!
//! This crate exposes the ledger operations to the desktop UI process:
//! party registration, the trade lifecycle, payments, and reports.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use mandi_db::PartyLocks;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Per-party recalculation locks, shared by every repository so that
    /// concurrent mutations of the same party serialize.
    pub locks: Arc<PartyLocks>,
}

impl AppState {
    /// Creates the application state around one database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Arc::new(db),
            locks: Arc::new(PartyLocks::new()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall status: `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Whether the database answered a ping.
    pub database: bool,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler. Pings the database so the desktop UI can tell a
/// dead backend from a dead database connection.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.ping().await.is_ok();
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod farmers;
pub mod health;
pub mod payments;
pub mod purchasers;
pub mod reports;
pub mod trades;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(farmers::routes())
        .merge(purchasers::routes())
        .merge(trades::routes())
        .merge(payments::routes())
        .merge(reports::routes())
}

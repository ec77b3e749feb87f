//! Trade lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post, put},
};
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::AppState;
use crate::routes::farmers::internal_error;
use mandi_core::trade::{TradeDraft, TradeUpdate};
use mandi_db::TradeRepository;
use mandi_db::repositories::trade::TradeError;
use mandi_shared::types::TradeId;

/// Creates the trade routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trades", post(create_trade))
        .route("/trades/{id}", put(update_trade))
        .route("/trades/{id}", delete(delete_trade))
}

/// POST `/trades` - Record a trade entry.
async fn create_trade(
    State(state): State<AppState>,
    Json(payload): Json<TradeDraft>,
) -> impl IntoResponse {
    let repo = TradeRepository::new((*state.db).clone(), state.locks.clone());

    match repo.create(payload).await {
        Ok(trade) => (StatusCode::CREATED, Json(json!(trade))).into_response(),
        Err(e) => trade_error_response(e),
    }
}

/// PUT `/trades/{id}` - Apply a partial update to a trade entry.
async fn update_trade(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TradeUpdate>,
) -> impl IntoResponse {
    let repo = TradeRepository::new((*state.db).clone(), state.locks.clone());

    match repo.update(TradeId::from_uuid(id), payload).await {
        Ok(trade) => (StatusCode::OK, Json(json!(trade))).into_response(),
        Err(e) => trade_error_response(e),
    }
}

/// DELETE `/trades/{id}` - Delete a trade entry. Idempotent.
async fn delete_trade(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = TradeRepository::new((*state.db).clone(), state.locks.clone());

    match repo.delete(TradeId::from_uuid(id)).await {
        Ok(deleted) => (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response(),
        Err(e) => trade_error_response(e),
    }
}

fn trade_error_response(error: TradeError) -> axum::response::Response {
    match error {
        TradeError::Invalid(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": e.error_code(),
                "message": e.to_string()
            })),
        )
            .into_response(),
        TradeError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "NOT_FOUND",
                "message": format!("trade {id} does not exist")
            })),
        )
            .into_response(),
        TradeError::FarmerNotFound(id) | TradeError::PurchaserNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "NOT_FOUND",
                "message": format!("party {id} does not exist")
            })),
        )
            .into_response(),
        TradeError::Recalculation { trade_id, source } => {
            // The trade row is persisted; only the stored balance is stale.
            warn!(trade_id = %trade_id, error = %source, "Trade persisted with stale balance");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "RECALCULATION_FAILED",
                    "message": format!(
                        "trade {trade_id} was saved but a balance is stale; retry the recalc operation"
                    )
                })),
            )
                .into_response()
        }
        TradeError::Database(e) => {
            error!(error = %e, "Trade operation failed");
            internal_error()
        }
    }
}

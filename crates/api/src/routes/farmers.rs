//! Farmer registration, listing, and balance recalculation routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use mandi_db::repositories::balance::BalanceError;
use mandi_db::repositories::party::CreateFarmerInput;
use mandi_db::{BalanceRepository, FarmerRepository};
use mandi_shared::types::FarmerId;

/// Creates the farmer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/farmers", get(list_farmers))
        .route("/farmers", post(create_farmer))
        .route("/farmers/{id}/recalc", post(recalc_farmer))
}

/// Request body for registering a farmer.
#[derive(Debug, Deserialize)]
pub struct CreateFarmerRequest {
    /// Farmer name.
    pub name: String,
    /// Primary mobile number.
    pub mobile: Option<String>,
    /// Alternate mobile number.
    pub alt_mobile: Option<String>,
    /// Village.
    pub village: Option<String>,
    /// Bank account number.
    pub bank_account: Option<String>,
    /// Bank IFSC code.
    pub bank_ifsc: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Balance carried over from before the ledger.
    #[serde(default)]
    pub opening_balance: Decimal,
}

/// POST `/farmers` - Register a farmer.
async fn create_farmer(
    State(state): State<AppState>,
    Json(payload): Json<CreateFarmerRequest>,
) -> impl IntoResponse {
    let repo = FarmerRepository::new((*state.db).clone());

    let input = CreateFarmerInput {
        name: payload.name,
        mobile: payload.mobile,
        alt_mobile: payload.alt_mobile,
        village: payload.village,
        bank_account: payload.bank_account,
        bank_ifsc: payload.bank_ifsc,
        notes: payload.notes,
        opening_balance: payload.opening_balance,
    };

    match repo.create(input).await {
        Ok(farmer) => {
            info!(farmer_id = %farmer.id, "Farmer registered");
            (StatusCode::CREATED, Json(json!(farmer))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to register farmer");
            internal_error()
        }
    }
}

/// GET `/farmers` - List farmers sorted by name.
async fn list_farmers(State(state): State<AppState>) -> impl IntoResponse {
    let repo = FarmerRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(farmers) => (StatusCode::OK, Json(json!(farmers))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list farmers");
            internal_error()
        }
    }
}

/// POST `/farmers/{id}/recalc` - Recalculate one farmer's balance from the
/// full history. Also the retry path after a reported recalculation failure.
async fn recalc_farmer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = BalanceRepository::new((*state.db).clone(), state.locks.clone());

    match repo.recalc_farmer_balance(FarmerId::from_uuid(id)).await {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({
                "farmer_id": id,
                "current_balance": balance
            })),
        )
            .into_response(),
        Err(BalanceError::FarmerNotFound(id)) => not_found("farmer", id),
        Err(e) => {
            error!(error = %e, "Failed to recalculate farmer balance");
            internal_error()
        }
    }
}

pub(super) fn not_found(entity: &str, id: Uuid) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "NOT_FOUND",
            "message": format!("{entity} {id} does not exist")
        })),
    )
        .into_response()
}

pub(super) fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "INTERNAL_ERROR",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

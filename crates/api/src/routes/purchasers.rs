//! Purchaser registration, listing, and balance recalculation routes.

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
use crate::routes::farmers::{internal_error, not_found};
use mandi_db::repositories::balance::BalanceError;
use mandi_db::repositories::party::CreatePurchaserInput;
use mandi_db::{BalanceRepository, PurchaserRepository};
use mandi_shared::types::PurchaserId;

/// Creates the purchaser routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/purchasers", get(list_purchasers))
        .route("/purchasers", post(create_purchaser))
        .route("/purchasers/{id}/recalc", post(recalc_purchaser))
}

/// Request body for registering a purchaser.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaserRequest {
    /// Registered company name.
    pub company_name: String,
    /// Contact person at the company.
    pub contact_person: Option<String>,
    /// Contact mobile number.
    pub mobile: Option<String>,
    /// GST registration number.
    pub gst_number: Option<String>,
    /// Informal credit limit.
    #[serde(default)]
    pub credit_limit: Decimal,
    /// Balance carried over from before the ledger.
    #[serde(default)]
    pub opening_balance: Decimal,
}

/// POST `/purchasers` - Register a purchaser.
async fn create_purchaser(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaserRequest>,
) -> impl IntoResponse {
    let repo = PurchaserRepository::new((*state.db).clone());

    let input = CreatePurchaserInput {
        company_name: payload.company_name,
        contact_person: payload.contact_person,
        mobile: payload.mobile,
        gst_number: payload.gst_number,
        credit_limit: payload.credit_limit,
        opening_balance: payload.opening_balance,
    };

    match repo.create(input).await {
        Ok(purchaser) => {
            info!(purchaser_id = %purchaser.id, "Purchaser registered");
            (StatusCode::CREATED, Json(json!(purchaser))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to register purchaser");
            internal_error()
        }
    }
}

/// GET `/purchasers` - List purchasers sorted by company name.
async fn list_purchasers(State(state): State<AppState>) -> impl IntoResponse {
    let repo = PurchaserRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(purchasers) => (StatusCode::OK, Json(json!(purchasers))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list purchasers");
            internal_error()
        }
    }
}

/// POST `/purchasers/{id}/recalc` - Recalculate one purchaser's balance from
/// the full history.
async fn recalc_purchaser(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = BalanceRepository::new((*state.db).clone(), state.locks.clone());

    match repo
        .recalc_purchaser_balance(PurchaserId::from_uuid(id))
        .await
    {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({
                "purchaser_id": id,
                "current_balance": balance
            })),
        )
            .into_response(),
        Err(BalanceError::PurchaserNotFound(id)) => not_found("purchaser", id),
        Err(e) => {
            error!(error = %e, "Failed to recalculate purchaser balance");
            internal_error()
        }
    }
}

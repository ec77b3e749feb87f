//! Payment and receipt routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::AppState;
use crate::routes::farmers::internal_error;
use mandi_core::payment::PaymentMode;
use mandi_db::PaymentRepository;
use mandi_db::repositories::payment::{PayFarmerInput, PaymentError, ReceiveFromPurchaserInput};
use mandi_shared::types::{FarmerId, PurchaserId};

/// Creates the payment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments/farmer", post(pay_farmer))
        .route("/payments/purchaser", post(receive_from_purchaser))
}

/// Request body for paying a farmer.
#[derive(Debug, Deserialize)]
pub struct PayFarmerRequest {
    /// The farmer to pay.
    pub farmer_id: Uuid,
    /// Amount to pay; must be positive.
    pub amount: Decimal,
    /// Settlement mode; farmers default to cash.
    pub mode: Option<PaymentMode>,
    /// Transaction id / cheque number.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Settlement date; defaults to today.
    pub date: Option<NaiveDate>,
}

/// Request body for receiving money from a purchaser.
#[derive(Debug, Deserialize)]
pub struct ReceiveFromPurchaserRequest {
    /// The purchaser to receive from.
    pub purchaser_id: Uuid,
    /// Amount received; must be positive.
    pub amount: Decimal,
    /// Settlement mode; purchasers default to bank.
    pub mode: Option<PaymentMode>,
    /// Transaction id / cheque number.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Settlement date; defaults to today.
    pub date: Option<NaiveDate>,
}

/// POST `/payments/farmer` - Record a payment from the firm to a farmer.
async fn pay_farmer(
    State(state): State<AppState>,
    Json(payload): Json<PayFarmerRequest>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone(), state.locks.clone());

    let input = PayFarmerInput {
        farmer_id: FarmerId::from_uuid(payload.farmer_id),
        amount: payload.amount,
        mode: payload.mode.unwrap_or(PaymentMode::Cash),
        reference: payload.reference,
        notes: payload.notes,
        date: payload.date.unwrap_or_else(today),
    };

    match repo.pay_farmer(input).await {
        Ok(payment) => (StatusCode::CREATED, Json(json!(payment))).into_response(),
        Err(e) => payment_error_response(e),
    }
}

/// POST `/payments/purchaser` - Record a receipt from a purchaser.
async fn receive_from_purchaser(
    State(state): State<AppState>,
    Json(payload): Json<ReceiveFromPurchaserRequest>,
) -> impl IntoResponse {
    let repo = PaymentRepository::new((*state.db).clone(), state.locks.clone());

    let input = ReceiveFromPurchaserInput {
        purchaser_id: PurchaserId::from_uuid(payload.purchaser_id),
        amount: payload.amount,
        mode: payload.mode.unwrap_or(PaymentMode::Bank),
        reference: payload.reference,
        notes: payload.notes,
        date: payload.date.unwrap_or_else(today),
    };

    match repo.receive_from_purchaser(input).await {
        Ok(receipt) => (StatusCode::CREATED, Json(json!(receipt))).into_response(),
        Err(e) => payment_error_response(e),
    }
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn payment_error_response(error: PaymentError) -> axum::response::Response {
    match error {
        PaymentError::Invalid(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": e.error_code(),
                "message": e.to_string()
            })),
        )
            .into_response(),
        PaymentError::FarmerNotFound(id) | PaymentError::PurchaserNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "NOT_FOUND",
                "message": format!("party {id} does not exist")
            })),
        )
            .into_response(),
        PaymentError::Recalculation { payment_id, source } => {
            // The settlement and its mirror are persisted; only the stored
            // balance is stale.
            warn!(payment_id = %payment_id, error = %source, "Payment persisted with stale balance");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "RECALCULATION_FAILED",
                    "message": format!(
                        "payment {payment_id} was saved but the balance is stale; retry the recalc operation"
                    )
                })),
            )
                .into_response()
        }
        PaymentError::Database(e) => {
            error!(error = %e, "Payment operation failed");
            internal_error()
        }
    }
}

//! Report routes: daily summary, party ledgers, firm cash flow.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::routes::farmers::internal_error;
use mandi_core::report::DateRange;
use mandi_db::ReportRepository;
use mandi_db::repositories::report::ReportError;
use mandi_shared::types::{FarmerId, PurchaserId};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/daily", get(daily_summary))
        .route("/reports/farmers/{id}/ledger", get(farmer_ledger))
        .route("/reports/purchasers/{id}/ledger", get(purchaser_ledger))
        .route("/reports/cash-flow", get(firm_cash_flow))
}

/// Query parameters selecting an inclusive date range.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    /// First included date.
    pub from: Option<NaiveDate>,
    /// Last included date.
    pub to: Option<NaiveDate>,
}

impl From<RangeQuery> for DateRange {
    fn from(query: RangeQuery) -> Self {
        Self {
            from: query.from,
            to: query.to,
        }
    }
}

/// GET `/reports/daily` - Trades grouped by calendar date.
async fn daily_summary(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());

    match repo.daily_summary(query.into()).await {
        Ok(rows) => (StatusCode::OK, Json(json!(rows))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// GET `/reports/farmers/{id}/ledger` - One farmer's trades and payments.
async fn farmer_ledger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());

    match repo
        .farmer_ledger(FarmerId::from_uuid(id), query.into())
        .await
    {
        Ok(ledger) => (StatusCode::OK, Json(json!(ledger))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// GET `/reports/purchasers/{id}/ledger` - One purchaser's trades and
/// receipts.
async fn purchaser_ledger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());

    match repo
        .purchaser_ledger(PurchaserId::from_uuid(id), query.into())
        .await
    {
        Ok(ledger) => (StatusCode::OK, Json(json!(ledger))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// GET `/reports/cash-flow` - Firm transactions plus income, expense, and
/// profit totals.
async fn firm_cash_flow(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());

    match repo.firm_cash_flow(query.into()).await {
        Ok(cash_flow) => (
            StatusCode::OK,
            Json(json!({
                "transactions": cash_flow.transactions,
                "income": cash_flow.totals.income,
                "expense": cash_flow.totals.expense,
                "profit": cash_flow.totals.profit()
            })),
        )
            .into_response(),
        Err(e) => report_error_response(e),
    }
}

fn report_error_response(error: ReportError) -> axum::response::Response {
    match error {
        ReportError::InvalidDateRange { start, end } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "INVALID_DATE_RANGE",
                "message": format!("start {start} is after end {end}")
            })),
        )
            .into_response(),
        ReportError::Database(e) => {
            error!(error = %e, "Report query failed");
            internal_error()
        }
    }
}

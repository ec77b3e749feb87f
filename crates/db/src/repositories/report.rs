//! Report repository: read-only, date-ranged queries over the ledger.
//!
//! The queries fetch range-filtered rows; grouping and totalling are done by
//! the pure rollup functions in `mandi-core::report`.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use mandi_core::report::{self, CashFlowTotals, DailySummaryRow, DateRange, TradeDayFacts};
use mandi_shared::types::{FarmerId, PurchaserId};

use crate::entities::{farmer_payments, firm_transactions, purchaser_receipts, trade_entries};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: chrono::NaiveDate,
        /// End date.
        end: chrono::NaiveDate,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// One farmer's raw trade and payment history over a range.
#[derive(Debug, Clone, Serialize)]
pub struct FarmerLedger {
    /// Trades sold by the farmer, date ascending.
    pub trades: Vec<trade_entries::Model>,
    /// Payments made to the farmer, date ascending.
    pub payments: Vec<farmer_payments::Model>,
}

/// One purchaser's raw trade and receipt history over a range.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaserLedger {
    /// Trades bought by the purchaser, date ascending.
    pub trades: Vec<trade_entries::Model>,
    /// Receipts collected from the purchaser, date ascending.
    pub receipts: Vec<purchaser_receipts::Model>,
}

/// Firm cash flow over a range: the raw rows plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct FirmCashFlow {
    /// Firm transactions in range, date ascending.
    pub transactions: Vec<firm_transactions::Model>,
    /// Income/expense totals (transfers excluded from both).
    pub totals: CashFlowTotals,
}

/// Repository for ledger reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Trades grouped by calendar date over the range, summing gross,
    /// deductions, net, and weight.
    pub async fn daily_summary(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailySummaryRow>, ReportError> {
        validate_range(range)?;

        let mut query = trade_entries::Entity::find();
        if let Some(from) = range.from {
            query = query.filter(trade_entries::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            query = query.filter(trade_entries::Column::Date.lte(to));
        }

        let facts: Vec<TradeDayFacts> = query
            .all(&self.db)
            .await?
            .iter()
            .map(|trade| TradeDayFacts {
                date: trade.date,
                gross_amount: trade.gross_amount,
                total_deductions: trade.total_deductions,
                net_amount: trade.net_amount,
                weight: trade.weight,
            })
            .collect();

        Ok(report::daily_summary(&facts))
    }

    /// Raw trade and payment lists for one farmer over the range.
    pub async fn farmer_ledger(
        &self,
        farmer_id: FarmerId,
        range: DateRange,
    ) -> Result<FarmerLedger, ReportError> {
        validate_range(range)?;

        let mut trades = trade_entries::Entity::find()
            .filter(trade_entries::Column::FarmerId.eq(farmer_id.into_inner()));
        if let Some(from) = range.from {
            trades = trades.filter(trade_entries::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            trades = trades.filter(trade_entries::Column::Date.lte(to));
        }

        let mut payments = farmer_payments::Entity::find()
            .filter(farmer_payments::Column::FarmerId.eq(farmer_id.into_inner()));
        if let Some(from) = range.from {
            payments = payments.filter(farmer_payments::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            payments = payments.filter(farmer_payments::Column::Date.lte(to));
        }

        Ok(FarmerLedger {
            trades: trades
                .order_by_asc(trade_entries::Column::Date)
                .all(&self.db)
                .await?,
            payments: payments
                .order_by_asc(farmer_payments::Column::Date)
                .all(&self.db)
                .await?,
        })
    }

    /// Raw trade and receipt lists for one purchaser over the range.
    pub async fn purchaser_ledger(
        &self,
        purchaser_id: PurchaserId,
        range: DateRange,
    ) -> Result<PurchaserLedger, ReportError> {
        validate_range(range)?;

        let mut trades = trade_entries::Entity::find()
            .filter(trade_entries::Column::PurchaserId.eq(purchaser_id.into_inner()));
        if let Some(from) = range.from {
            trades = trades.filter(trade_entries::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            trades = trades.filter(trade_entries::Column::Date.lte(to));
        }

        let mut receipts = purchaser_receipts::Entity::find()
            .filter(purchaser_receipts::Column::PurchaserId.eq(purchaser_id.into_inner()));
        if let Some(from) = range.from {
            receipts = receipts.filter(purchaser_receipts::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            receipts = receipts.filter(purchaser_receipts::Column::Date.lte(to));
        }

        Ok(PurchaserLedger {
            trades: trades
                .order_by_asc(trade_entries::Column::Date)
                .all(&self.db)
                .await?,
            receipts: receipts
                .order_by_asc(purchaser_receipts::Column::Date)
                .all(&self.db)
                .await?,
        })
    }

    /// All firm transactions in range plus income/expense/profit totals.
    pub async fn firm_cash_flow(&self, range: DateRange) -> Result<FirmCashFlow, ReportError> {
        validate_range(range)?;

        let mut query = firm_transactions::Entity::find();
        if let Some(from) = range.from {
            query = query.filter(firm_transactions::Column::Date.gte(from));
        }
        if let Some(to) = range.to {
            query = query.filter(firm_transactions::Column::Date.lte(to));
        }

        let transactions = query
            .order_by_asc(firm_transactions::Column::Date)
            .all(&self.db)
            .await?;

        let totals = report::cash_flow_totals(
            transactions
                .iter()
                .map(|txn| (txn.kind.into(), txn.amount)),
        );

        Ok(FirmCashFlow {
            transactions,
            totals,
        })
    }
}

fn validate_range(range: DateRange) -> Result<(), ReportError> {
    if let (Some(start), Some(end)) = (range.from, range.to)
        && start > end
    {
        return Err(ReportError::InvalidDateRange { start, end });
    }
    Ok(())
}

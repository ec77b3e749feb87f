//! Read-only rollups over trades, payments, and firm transactions.
//!
//! The persistence layer fetches range-filtered rows; the functions here do
//! the grouping and totalling. Report formatting is left to consumers.

pub mod service;
pub mod types;

pub use service::{cash_flow_totals, daily_summary};
pub use types::{CashFlowTotals, DailySummaryRow, DateRange, TradeDayFacts};

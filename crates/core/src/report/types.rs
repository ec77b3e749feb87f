//! Report domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive date range; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First included date, if bounded below.
    pub from: Option<NaiveDate>,
    /// Last included date, if bounded above.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// An unbounded range covering the whole ledger.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Returns true if `date` falls inside the range (inclusive both ends).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// The per-trade figures the daily summary aggregates over.
///
/// A projection of a persisted trade entry; the persistence layer maps its
/// rows into this before handing them to [`crate::report::daily_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeDayFacts {
    /// Trade date.
    pub date: NaiveDate,
    /// Persisted gross amount.
    pub gross_amount: Decimal,
    /// Persisted total deductions.
    pub total_deductions: Decimal,
    /// Persisted net amount.
    pub net_amount: Decimal,
    /// Lot weight in kilograms.
    pub weight: Decimal,
}

/// One calendar day of summed trade activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySummaryRow {
    /// The calendar date.
    pub date: NaiveDate,
    /// Summed gross amount.
    pub gross: Decimal,
    /// Summed deductions.
    pub deductions: Decimal,
    /// Summed net amount.
    pub net: Decimal,
    /// Summed lot weight in kilograms.
    pub weight: Decimal,
}

/// Income/expense totals over a range of firm transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CashFlowTotals {
    /// Summed income.
    pub income: Decimal,
    /// Summed expense.
    pub expense: Decimal,
}

impl CashFlowTotals {
    /// Net profit over the range: income minus expense.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = DateRange {
            from: Some(d("2026-07-01")),
            to: Some(d("2026-07-31")),
        };
        assert!(range.contains(d("2026-07-01")));
        assert!(range.contains(d("2026-07-31")));
        assert!(!range.contains(d("2026-06-30")));
        assert!(!range.contains(d("2026-08-01")));
    }

    #[test]
    fn test_open_ends() {
        let from_only = DateRange {
            from: Some(d("2026-07-01")),
            to: None,
        };
        assert!(from_only.contains(d("2030-01-01")));
        assert!(!from_only.contains(d("2026-06-30")));

        assert!(DateRange::all().contains(d("1999-01-01")));
    }
}

//! Report aggregation over fetched rows.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{CashFlowTotals, DailySummaryRow, TradeDayFacts};
use crate::payment::FlowKind;

/// Groups trades by calendar date, summing gross, deductions, net, and
/// weight. Rows come back in ascending date order.
#[must_use]
pub fn daily_summary(trades: &[TradeDayFacts]) -> Vec<DailySummaryRow> {
    let mut days: BTreeMap<chrono::NaiveDate, DailySummaryRow> = BTreeMap::new();

    for trade in trades {
        let day = days.entry(trade.date).or_insert(DailySummaryRow {
            date: trade.date,
            gross: Decimal::ZERO,
            deductions: Decimal::ZERO,
            net: Decimal::ZERO,
            weight: Decimal::ZERO,
        });
        day.gross += trade.gross_amount;
        day.deductions += trade.total_deductions;
        day.net += trade.net_amount;
        day.weight += trade.weight;
    }

    days.into_values().collect()
}

/// Sums firm transactions into income and expense totals.
///
/// Transfers move money between the firm's own accounts, so they count
/// toward neither total.
#[must_use]
pub fn cash_flow_totals<I>(transactions: I) -> CashFlowTotals
where
    I: IntoIterator<Item = (FlowKind, Decimal)>,
{
    let mut totals = CashFlowTotals {
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
    };

    for (kind, amount) in transactions {
        match kind {
            FlowKind::Income => totals.income += amount,
            FlowKind::Expense => totals.expense += amount,
            FlowKind::Transfer => {}
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn facts(date: &str, gross: Decimal, deductions: Decimal, weight: Decimal) -> TradeDayFacts {
        TradeDayFacts {
            date: d(date),
            gross_amount: gross,
            total_deductions: deductions,
            net_amount: gross - deductions,
            weight,
        }
    }

    #[test]
    fn test_daily_summary_groups_and_sorts() {
        let trades = vec![
            facts("2026-07-15", dec!(500000), dec!(245), dec!(200)),
            facts("2026-07-14", dec!(120000), dec!(100), dec!(60)),
            facts("2026-07-15", dec!(80000), dec!(55), dec!(40)),
        ];

        let rows = daily_summary(&trades);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].date, d("2026-07-14"));
        assert_eq!(rows[0].gross, dec!(120000));

        assert_eq!(rows[1].date, d("2026-07-15"));
        assert_eq!(rows[1].gross, dec!(580000));
        assert_eq!(rows[1].deductions, dec!(300));
        assert_eq!(rows[1].net, dec!(579700));
        assert_eq!(rows[1].weight, dec!(240));
    }

    #[test]
    fn test_daily_summary_empty() {
        assert!(daily_summary(&[]).is_empty());
    }

    #[test]
    fn test_cash_flow_totals() {
        let totals = cash_flow_totals(vec![
            (FlowKind::Income, dec!(80000)),
            (FlowKind::Expense, dec!(65000)),
            (FlowKind::Income, dec!(5000)),
            (FlowKind::Transfer, dec!(20000)),
        ]);
        assert_eq!(totals.income, dec!(85000));
        assert_eq!(totals.expense, dec!(65000));
        assert_eq!(totals.profit(), dec!(20000));
    }

    #[test]
    fn test_cash_flow_totals_empty() {
        let totals = cash_flow_totals(std::iter::empty());
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.expense, Decimal::ZERO);
        assert_eq!(totals.profit(), Decimal::ZERO);
    }
}

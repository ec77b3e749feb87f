//! Monetary figures of a trade and the totals derived from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mandi_shared::types::money::round2;

/// The six raw monetary inputs of a trade entry.
///
/// `bhaav` is the agreed rate for the lot and `weight` is in kilograms; the
/// remaining four are absolute deduction amounts retained by the firm or
/// passed through to the market yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFigures {
    /// Agreed trade rate for the lot.
    pub bhaav: Decimal,
    /// Lot weight in kilograms.
    pub weight: Decimal,
    /// Fixed count-based deduction.
    pub lungar: Decimal,
    /// Market-yard tax, as an absolute amount.
    pub mandi_tax: Decimal,
    /// Firm commission.
    pub commission: Decimal,
    /// Labor/handling charge.
    pub majduri: Decimal,
}

/// Totals derived from [`TradeFigures`], persisted alongside the raw inputs.
///
/// Invariant: for every persisted trade, `net_amount` equals
/// `round2(gross_amount - total_deductions)` with both operands themselves
/// derived by [`derive_totals`]. Whenever any raw input changes, all three
/// fields are recomputed together before the row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTotals {
    /// `round2(bhaav * weight)`.
    pub gross_amount: Decimal,
    /// `round2(lungar + mandi_tax + commission + majduri)`.
    pub total_deductions: Decimal,
    /// `round2(gross_amount - total_deductions)`.
    pub net_amount: Decimal,
}

/// Derives the persisted totals from the raw monetary inputs.
///
/// Gross amount is `bhaav * weight` without a per-100kg division; callers
/// quoting a per-100kg rate must scale `bhaav` before submitting. Each total
/// is rounded to two decimal places, half away from zero.
#[must_use]
pub fn derive_totals(figures: &TradeFigures) -> TradeTotals {
    let gross_amount = round2(figures.bhaav * figures.weight);
    let total_deductions =
        round2(figures.lungar + figures.mandi_tax + figures.commission + figures.majduri);
    let net_amount = round2(gross_amount - total_deductions);

    TradeTotals {
        gross_amount,
        total_deductions,
        net_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn figures(
        bhaav: Decimal,
        weight: Decimal,
        lungar: Decimal,
        mandi_tax: Decimal,
        commission: Decimal,
        majduri: Decimal,
    ) -> TradeFigures {
        TradeFigures {
            bhaav,
            weight,
            lungar,
            mandi_tax,
            commission,
            majduri,
        }
    }

    #[test]
    fn test_worked_example() {
        // bhaav=2500, weight=200 -> gross=500000 (no division by 100)
        let totals = derive_totals(&figures(
            dec!(2500),
            dec!(200),
            dec!(20),
            dec!(50),
            dec!(100),
            dec!(75),
        ));
        assert_eq!(totals.gross_amount, dec!(500000));
        assert_eq!(totals.total_deductions, dec!(245));
        assert_eq!(totals.net_amount, dec!(499755));
    }

    #[test]
    fn test_zero_deductions() {
        let totals = derive_totals(&figures(
            dec!(1850.50),
            dec!(120.25),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        assert_eq!(totals.total_deductions, Decimal::ZERO);
        assert_eq!(totals.net_amount, totals.gross_amount);
    }

    #[test]
    fn test_gross_is_rounded_to_paise() {
        // 10.555 * 3 = 31.665 -> 31.67 (half away from zero)
        let totals = derive_totals(&figures(
            dec!(10.555),
            dec!(3),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        assert_eq!(totals.gross_amount, dec!(31.67));
    }

    #[test]
    fn test_deductions_exceeding_gross_yield_negative_net() {
        let totals = derive_totals(&figures(
            dec!(100),
            dec!(1),
            dec!(60),
            dec!(30),
            dec!(20),
            dec!(10),
        ));
        assert_eq!(totals.net_amount, dec!(-20));
    }
}

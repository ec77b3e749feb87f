//! Property tests for trade total derivation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use mandi_shared::types::money::round2;

use super::figures::{TradeFigures, derive_totals};
use super::types::TradeUpdate;

/// Strategy for amounts with paise precision, within realistic mandi ranges.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a full set of trade figures.
fn figures_strategy() -> impl Strategy<Value = TradeFigures> {
    (
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(
            |(bhaav, weight, lungar, mandi_tax, commission, majduri)| TradeFigures {
                bhaav,
                weight,
                lungar,
                mandi_tax,
                commission,
                majduri,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any inputs, the persisted-totals invariant holds:
    /// `net == round2(round2(bhaav*weight) - round2(sum of deductions))`.
    #[test]
    fn prop_net_amount_formula(figures in figures_strategy()) {
        let totals = derive_totals(&figures);

        let expected_gross = round2(figures.bhaav * figures.weight);
        let expected_deductions = round2(
            figures.lungar + figures.mandi_tax + figures.commission + figures.majduri,
        );

        prop_assert_eq!(totals.gross_amount, expected_gross);
        prop_assert_eq!(totals.total_deductions, expected_deductions);
        prop_assert_eq!(totals.net_amount, round2(expected_gross - expected_deductions));
    }

    /// Derivation is deterministic: same inputs, same totals.
    #[test]
    fn prop_derivation_deterministic(figures in figures_strategy()) {
        prop_assert_eq!(derive_totals(&figures), derive_totals(&figures));
    }

    /// All derived totals carry at most two decimal places.
    #[test]
    fn prop_totals_have_paise_scale(figures in figures_strategy()) {
        let totals = derive_totals(&figures);
        prop_assert_eq!(totals.gross_amount, round2(totals.gross_amount));
        prop_assert_eq!(totals.total_deductions, round2(totals.total_deductions));
        prop_assert_eq!(totals.net_amount, round2(totals.net_amount));
    }

    /// Merging an empty update is the identity.
    #[test]
    fn prop_empty_update_is_identity(figures in figures_strategy()) {
        let update = TradeUpdate::default();
        prop_assert_eq!(update.merged_figures(&figures), figures);
    }

    /// A full update replaces every figure, regardless of the current row.
    #[test]
    fn prop_full_update_replaces_all(
        current in figures_strategy(),
        replacement in figures_strategy(),
    ) {
        let update = TradeUpdate {
            bhaav: Some(replacement.bhaav),
            weight: Some(replacement.weight),
            lungar: Some(replacement.lungar),
            mandi_tax: Some(replacement.mandi_tax),
            commission: Some(replacement.commission),
            majduri: Some(replacement.majduri),
            ..TradeUpdate::default()
        };
        prop_assert_eq!(update.merged_figures(&current), replacement);
    }

    /// Rederiving after a partial merge equals deriving the merged figures
    /// directly: no path through the update can observe zero-defaulted fields.
    #[test]
    fn prop_partial_merge_never_zeroes_fields(
        current in figures_strategy(),
        new_weight in amount_strategy(),
    ) {
        let update = TradeUpdate { weight: Some(new_weight), ..TradeUpdate::default() };
        let merged = update.merged_figures(&current);

        prop_assert_eq!(merged.bhaav, current.bhaav);
        prop_assert_eq!(merged.lungar, current.lungar);
        prop_assert_eq!(merged.mandi_tax, current.mandi_tax);
        prop_assert_eq!(merged.commission, current.commission);
        prop_assert_eq!(merged.majduri, current.majduri);
        prop_assert_eq!(
            derive_totals(&merged).total_deductions,
            derive_totals(&current).total_deductions,
        );
    }
}

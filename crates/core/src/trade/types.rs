//! Trade domain types for creation and update.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mandi_shared::types::{FarmerId, PurchaserId};

use super::figures::TradeFigures;

/// Input for creating a trade entry, as supplied by the caller.
///
/// `bhaav` and `weight` are optional here so that a payload missing either
/// field is representable and can be rejected with a typed error instead of
/// silently defaulting to zero. The four deduction fields default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    /// Trade date.
    pub date: NaiveDate,
    /// Serial number on the day's lot sheet.
    pub sr_no: Option<i32>,
    /// Auction board number.
    pub board_no: Option<String>,
    /// Vehicle number of the lot.
    pub gaadi_no: Option<String>,
    /// The farmer who sold the lot.
    pub farmer_id: FarmerId,
    /// The purchaser who bought the lot.
    pub purchaser_id: PurchaserId,
    /// Agreed trade rate. Required.
    pub bhaav: Option<Decimal>,
    /// Lot weight in kilograms. Required.
    pub weight: Option<Decimal>,
    /// Fixed count-based deduction.
    #[serde(default)]
    pub lungar: Decimal,
    /// Market-yard tax amount.
    #[serde(default)]
    pub mandi_tax: Decimal,
    /// Firm commission.
    #[serde(default)]
    pub commission: Decimal,
    /// Labor/handling charge.
    #[serde(default)]
    pub majduri: Decimal,
    /// Free-text remarks.
    pub remarks: Option<String>,
}

/// A trade draft that passed validation: required fields are present and
/// the monetary inputs are well-formed.
#[derive(Debug, Clone)]
pub struct ValidatedTrade {
    /// Trade date.
    pub date: NaiveDate,
    /// Serial number on the day's lot sheet.
    pub sr_no: Option<i32>,
    /// Auction board number.
    pub board_no: Option<String>,
    /// Vehicle number of the lot.
    pub gaadi_no: Option<String>,
    /// The farmer who sold the lot.
    pub farmer_id: FarmerId,
    /// The purchaser who bought the lot.
    pub purchaser_id: PurchaserId,
    /// The six raw monetary inputs.
    pub figures: TradeFigures,
    /// Free-text remarks.
    pub remarks: Option<String>,
}

/// Partial update for an existing trade entry.
///
/// Every field is optional; absent fields keep their persisted value. When
/// any of the six monetary fields is present, the totals must be rederived
/// from the merged view of the persisted row and this update, via
/// [`TradeUpdate::merged_figures`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeUpdate {
    /// New trade date.
    pub date: Option<NaiveDate>,
    /// New serial number.
    pub sr_no: Option<i32>,
    /// New auction board number.
    pub board_no: Option<String>,
    /// New vehicle number.
    pub gaadi_no: Option<String>,
    /// Reassigns the trade to another farmer.
    pub farmer_id: Option<FarmerId>,
    /// Reassigns the trade to another purchaser.
    pub purchaser_id: Option<PurchaserId>,
    /// New trade rate.
    pub bhaav: Option<Decimal>,
    /// New lot weight.
    pub weight: Option<Decimal>,
    /// New lungar deduction.
    pub lungar: Option<Decimal>,
    /// New market-yard tax amount.
    pub mandi_tax: Option<Decimal>,
    /// New firm commission.
    pub commission: Option<Decimal>,
    /// New labor charge.
    pub majduri: Option<Decimal>,
    /// New remarks.
    pub remarks: Option<String>,
}

impl TradeUpdate {
    /// Returns true if any of the six monetary inputs is present, i.e. the
    /// derived totals must be recomputed.
    #[must_use]
    pub const fn touches_money(&self) -> bool {
        self.bhaav.is_some()
            || self.weight.is_some()
            || self.lungar.is_some()
            || self.mandi_tax.is_some()
            || self.commission.is_some()
            || self.majduri.is_some()
    }

    /// Overlays this update on the persisted figures.
    ///
    /// Absent fields keep the current value. Rederiving totals from anything
    /// other than this merged view corrupts `net_amount` on partial edits.
    #[must_use]
    pub fn merged_figures(&self, current: &TradeFigures) -> TradeFigures {
        TradeFigures {
            bhaav: self.bhaav.unwrap_or(current.bhaav),
            weight: self.weight.unwrap_or(current.weight),
            lungar: self.lungar.unwrap_or(current.lungar),
            mandi_tax: self.mandi_tax.unwrap_or(current.mandi_tax),
            commission: self.commission.unwrap_or(current.commission),
            majduri: self.majduri.unwrap_or(current.majduri),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::figures::derive_totals;
    use rust_decimal_macros::dec;

    fn current_figures() -> TradeFigures {
        TradeFigures {
            bhaav: dec!(2500),
            weight: dec!(200),
            lungar: dec!(20),
            mandi_tax: dec!(50),
            commission: dec!(100),
            majduri: dec!(75),
        }
    }

    #[test]
    fn test_empty_update_touches_nothing() {
        let update = TradeUpdate::default();
        assert!(!update.touches_money());
        assert_eq!(update.merged_figures(&current_figures()), current_figures());
    }

    #[test]
    fn test_partial_update_keeps_absent_fields() {
        let update = TradeUpdate {
            weight: Some(dec!(250)),
            ..TradeUpdate::default()
        };
        assert!(update.touches_money());

        let merged = update.merged_figures(&current_figures());
        assert_eq!(merged.weight, dec!(250));
        assert_eq!(merged.bhaav, dec!(2500));
        assert_eq!(merged.lungar, dec!(20));
    }

    #[test]
    fn test_partial_update_rederives_against_merged_view() {
        // Changing only the weight must still account for the persisted
        // bhaav and deductions, not zero defaults.
        let update = TradeUpdate {
            weight: Some(dec!(250)),
            ..TradeUpdate::default()
        };
        let totals = derive_totals(&update.merged_figures(&current_figures()));
        assert_eq!(totals.gross_amount, dec!(625000));
        assert_eq!(totals.total_deductions, dec!(245));
        assert_eq!(totals.net_amount, dec!(624755));
    }

    #[test]
    fn test_reassignment_alone_does_not_touch_money() {
        let update = TradeUpdate {
            farmer_id: Some(FarmerId::new()),
            purchaser_id: Some(PurchaserId::new()),
            ..TradeUpdate::default()
        };
        assert!(!update.touches_money());
    }
}

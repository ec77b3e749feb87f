//! Trade input validation.

use rust_decimal::Decimal;

use super::error::TradeValidationError;
use super::figures::TradeFigures;
use super::types::{TradeDraft, ValidatedTrade};

/// Validates a trade draft and produces the figures used for derivation.
///
/// `bhaav` and `weight` must be present and non-negative; the deduction
/// fields must be non-negative. Presence of the referenced farmer and
/// purchaser is checked by the persistence layer, not here.
///
/// # Errors
///
/// Returns [`TradeValidationError`] if a required field is missing or a
/// monetary field is negative. Nothing is persisted on failure.
pub fn validate_draft(draft: TradeDraft) -> Result<ValidatedTrade, TradeValidationError> {
    let bhaav = require(draft.bhaav, "bhaav")?;
    let weight = require(draft.weight, "weight")?;

    let figures = TradeFigures {
        bhaav,
        weight,
        lungar: non_negative(draft.lungar, "lungar")?,
        mandi_tax: non_negative(draft.mandi_tax, "mandiTax")?,
        commission: non_negative(draft.commission, "commission")?,
        majduri: non_negative(draft.majduri, "majduri")?,
    };

    Ok(ValidatedTrade {
        date: draft.date,
        sr_no: draft.sr_no,
        board_no: draft.board_no,
        gaadi_no: draft.gaadi_no,
        farmer_id: draft.farmer_id,
        purchaser_id: draft.purchaser_id,
        figures,
        remarks: draft.remarks,
    })
}

/// Validates a full set of figures, as produced by merging an update onto
/// the persisted row. Applies the same non-negativity rules as
/// [`validate_draft`]; presence is guaranteed by the merge.
///
/// # Errors
///
/// Returns [`TradeValidationError::NegativeField`] if any figure is
/// negative.
pub fn validate_figures(figures: &TradeFigures) -> Result<(), TradeValidationError> {
    non_negative(figures.bhaav, "bhaav")?;
    non_negative(figures.weight, "weight")?;
    non_negative(figures.lungar, "lungar")?;
    non_negative(figures.mandi_tax, "mandiTax")?;
    non_negative(figures.commission, "commission")?;
    non_negative(figures.majduri, "majduri")?;
    Ok(())
}

fn require(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Decimal, TradeValidationError> {
    let value = value.ok_or(TradeValidationError::MissingField { field })?;
    non_negative(value, field)
}

fn non_negative(value: Decimal, field: &'static str) -> Result<Decimal, TradeValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(TradeValidationError::NegativeField { field });
    }
    Ok(value)
}

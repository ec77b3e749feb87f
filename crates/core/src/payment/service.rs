//! Payment validation and mirror-entry construction.

use rust_decimal::Decimal;

use super::error::PaymentValidationError;
use super::types::{CashAccount, CounterpartyKind, FlowKind, PaymentMode};

/// The firm cash-flow row mirrored from a payment or receipt.
///
/// Every settlement produces exactly one of these, appended to the firm
/// transaction ledger as part of the same persistence step as the payment
/// record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorEntry {
    /// Income for receipts, expense for payments.
    pub kind: FlowKind,
    /// Account derived from the settlement mode.
    pub account: CashAccount,
    /// Fixed reporting category.
    pub category: &'static str,
    /// Counterparty classification.
    pub counterparty: CounterpartyKind,
}

/// Validates a settlement amount.
///
/// # Errors
///
/// Returns [`PaymentValidationError::NonPositiveAmount`] for zero or
/// negative amounts. There is deliberately no upper check against the
/// outstanding balance: overpayment is permitted and simply drives the
/// party's balance past zero.
pub fn validate_amount(amount: Decimal) -> Result<(), PaymentValidationError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentValidationError::NonPositiveAmount { amount });
    }
    Ok(())
}

/// Mirror entry for a payment from the firm to a farmer.
#[must_use]
pub const fn farmer_payment_mirror(mode: PaymentMode) -> MirrorEntry {
    MirrorEntry {
        kind: FlowKind::Expense,
        account: mode.settlement_account(),
        category: "farmer_payment",
        counterparty: CounterpartyKind::Farmer,
    }
}

/// Mirror entry for a receipt from a purchaser to the firm.
#[must_use]
pub const fn purchaser_receipt_mirror(mode: PaymentMode) -> MirrorEntry {
    MirrorEntry {
        kind: FlowKind::Income,
        account: mode.settlement_account(),
        category: "purchaser_receipt",
        counterparty: CounterpartyKind::Purchaser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_amount_accepted() {
        assert!(validate_amount(dec!(0.01)).is_ok());
        assert!(validate_amount(dec!(250000)).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            validate_amount(Decimal::ZERO).unwrap_err(),
            PaymentValidationError::NonPositiveAmount {
                amount: Decimal::ZERO
            }
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            validate_amount(dec!(-10)),
            Err(PaymentValidationError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_farmer_payment_is_cash_expense_when_paid_in_cash() {
        let mirror = farmer_payment_mirror(PaymentMode::Cash);
        assert_eq!(mirror.kind, FlowKind::Expense);
        assert_eq!(mirror.account, CashAccount::Cash);
        assert_eq!(mirror.category, "farmer_payment");
        assert_eq!(mirror.counterparty, CounterpartyKind::Farmer);
    }

    #[test]
    fn test_purchaser_receipt_is_bank_income_for_upi() {
        let mirror = purchaser_receipt_mirror(PaymentMode::Upi);
        assert_eq!(mirror.kind, FlowKind::Income);
        assert_eq!(mirror.account, CashAccount::Bank);
        assert_eq!(mirror.category, "purchaser_receipt");
        assert_eq!(mirror.counterparty, CounterpartyKind::Purchaser);
    }

    #[rstest]
    #[case(PaymentMode::Cash, CashAccount::Cash)]
    #[case(PaymentMode::Bank, CashAccount::Bank)]
    #[case(PaymentMode::Upi, CashAccount::Bank)]
    #[case(PaymentMode::Cheque, CashAccount::Bank)]
    fn test_mirror_account_follows_mode(
        #[case] mode: PaymentMode,
        #[case] account: CashAccount,
    ) {
        assert_eq!(farmer_payment_mirror(mode).account, account);
        assert_eq!(purchaser_receipt_mirror(mode).account, account);
    }
}

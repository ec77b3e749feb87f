//! Payment and cash-flow domain types.

use serde::{Deserialize, Serialize};

/// Settlement mode of a payment or receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Cash handed over at the yard.
    Cash,
    /// Bank transfer (NEFT/RTGS/IMPS).
    Bank,
    /// UPI transfer.
    Upi,
    /// Cheque, referenced by number.
    Cheque,
}

impl PaymentMode {
    /// The firm account a settlement in this mode moves money through.
    /// Only cash settles through the cash box; everything else clears via
    /// the bank account.
    #[must_use]
    pub const fn settlement_account(self) -> CashAccount {
        match self {
            Self::Cash => CashAccount::Cash,
            Self::Bank | Self::Upi | Self::Cheque => CashAccount::Bank,
        }
    }
}

/// Direction of a firm cash-flow transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Money flowing into the firm.
    Income,
    /// Money flowing out of the firm.
    Expense,
    /// Movement between the firm's own accounts.
    Transfer,
}

/// The firm account a cash-flow transaction touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashAccount {
    /// The cash box.
    Cash,
    /// The firm's bank account.
    Bank,
}

/// The kind of counterparty a firm transaction references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    /// A registered farmer.
    Farmer,
    /// A registered purchaser.
    Purchaser,
    /// Anything else (rent, diesel, interest, ...).
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cash_settles_through_cash_box() {
        assert_eq!(PaymentMode::Cash.settlement_account(), CashAccount::Cash);
        assert_eq!(PaymentMode::Bank.settlement_account(), CashAccount::Bank);
        assert_eq!(PaymentMode::Upi.settlement_account(), CashAccount::Bank);
        assert_eq!(PaymentMode::Cheque.settlement_account(), CashAccount::Bank);
    }
}

//! Payment validation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a payment or receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentValidationError {
    /// Payment amounts must be strictly positive.
    #[error("Payment amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Decimal,
    },
}

impl PaymentValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount { .. } => "INVALID_AMOUNT",
        }
    }
}

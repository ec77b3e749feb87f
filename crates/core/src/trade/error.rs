//! Trade validation error types.

use thiserror::Error;

/// Errors raised while validating a trade draft or update.
///
/// Both variants correspond to a rejected trade: the record is never
/// persisted when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeValidationError {
    /// A required monetary field is absent from the payload.
    #[error("Trade field '{field}' is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A monetary field that must not be negative carries a negative value.
    #[error("Trade field '{field}' must not be negative")]
    NegativeField {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl TradeValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::NegativeField { .. } => "INVALID_TRADE",
        }
    }
}

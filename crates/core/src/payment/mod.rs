//! Payment validation and firm cash-flow mirroring.
//!
//! Payments to farmers and receipts from purchasers never touch balances
//! directly; they are persisted, mirrored into the firm-wide cash-flow
//! ledger, and then the affected party's balance is recalculated from
//! scratch. This module holds the pure parts: amount validation and the
//! mirror-entry mapping.

pub mod error;
pub mod service;
pub mod types;

pub use error::PaymentValidationError;
pub use service::{MirrorEntry, farmer_payment_mirror, purchaser_receipt_mirror, validate_amount};
pub use types::{CashAccount, CounterpartyKind, FlowKind, PaymentMode};

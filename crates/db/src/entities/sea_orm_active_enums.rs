//! `SeaORM` active enums mapped to Postgres enum types.
//!
//! Each enum has a domain twin in `mandi-core`; the `From` impls keep the
//! persistence representation out of the core crate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use mandi_core::payment;

/// Settlement mode of a payment or receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_mode")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Cash handed over at the yard.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank transfer.
    #[sea_orm(string_value = "bank")]
    Bank,
    /// UPI transfer.
    #[sea_orm(string_value = "upi")]
    Upi,
    /// Cheque.
    #[sea_orm(string_value = "cheque")]
    Cheque,
}

/// Direction of a firm cash-flow transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "flow_kind")]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Money flowing into the firm.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money flowing out of the firm.
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Movement between the firm's own accounts.
    #[sea_orm(string_value = "transfer")]
    Transfer,
}

/// The firm account a cash-flow transaction touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "cash_account")]
#[serde(rename_all = "lowercase")]
pub enum CashAccount {
    /// The cash box.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// The firm's bank account.
    #[sea_orm(string_value = "bank")]
    Bank,
}

/// The kind of counterparty a firm transaction references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "counterparty_kind")]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    /// A registered farmer.
    #[sea_orm(string_value = "farmer")]
    Farmer,
    /// A registered purchaser.
    #[sea_orm(string_value = "purchaser")]
    Purchaser,
    /// Anything else.
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<payment::PaymentMode> for PaymentMode {
    fn from(mode: payment::PaymentMode) -> Self {
        match mode {
            payment::PaymentMode::Cash => Self::Cash,
            payment::PaymentMode::Bank => Self::Bank,
            payment::PaymentMode::Upi => Self::Upi,
            payment::PaymentMode::Cheque => Self::Cheque,
        }
    }
}

impl From<PaymentMode> for payment::PaymentMode {
    fn from(mode: PaymentMode) -> Self {
        match mode {
            PaymentMode::Cash => Self::Cash,
            PaymentMode::Bank => Self::Bank,
            PaymentMode::Upi => Self::Upi,
            PaymentMode::Cheque => Self::Cheque,
        }
    }
}

impl From<payment::FlowKind> for FlowKind {
    fn from(kind: payment::FlowKind) -> Self {
        match kind {
            payment::FlowKind::Income => Self::Income,
            payment::FlowKind::Expense => Self::Expense,
            payment::FlowKind::Transfer => Self::Transfer,
        }
    }
}

impl From<FlowKind> for payment::FlowKind {
    fn from(kind: FlowKind) -> Self {
        match kind {
            FlowKind::Income => Self::Income,
            FlowKind::Expense => Self::Expense,
            FlowKind::Transfer => Self::Transfer,
        }
    }
}

impl From<payment::CashAccount> for CashAccount {
    fn from(account: payment::CashAccount) -> Self {
        match account {
            payment::CashAccount::Cash => Self::Cash,
            payment::CashAccount::Bank => Self::Bank,
        }
    }
}

impl From<payment::CounterpartyKind> for CounterpartyKind {
    fn from(kind: payment::CounterpartyKind) -> Self {
        match kind {
            payment::CounterpartyKind::Farmer => Self::Farmer,
            payment::CounterpartyKind::Purchaser => Self::Purchaser,
            payment::CounterpartyKind::Other => Self::Other,
        }
    }
}

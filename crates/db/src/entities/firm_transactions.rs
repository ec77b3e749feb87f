//! `SeaORM` entity for the firm_transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{CashAccount, CounterpartyKind, FlowKind};

/// A firm-wide cash-flow record. Append-only.
///
/// Every payment and receipt mirrors one of these; manual rows (diesel,
/// rent, interest) use `counterparty_kind = other`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "firm_transactions")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Transaction date.
    pub date: Date,
    /// Income, expense, or internal transfer.
    pub kind: FlowKind,
    /// The firm account the money moved through.
    pub account: CashAccount,
    /// Reporting category, e.g. `farmer_payment`, `purchaser_receipt`.
    pub category: String,
    /// Transaction amount.
    pub amount: Decimal,
    /// Counterparty classification.
    pub counterparty_kind: CounterpartyKind,
    /// Id of the farmer/purchaser when the counterparty is registered.
    pub counterparty_id: Option<Uuid>,
    /// Free-text notes (carries the settlement reference for mirrors).
    pub notes: Option<String>,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

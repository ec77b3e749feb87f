//! `SeaORM` entity for the purchaser_receipts table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentMode;

/// A receipt of money from a purchaser to the firm. Write-once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "purchaser_receipts")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Settlement date.
    pub date: Date,
    /// The purchaser received from.
    pub purchaser_id: Uuid,
    /// Settlement mode.
    pub mode: PaymentMode,
    /// Amount received.
    pub amount: Decimal,
    /// Transaction id / cheque number.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The purchaser this receipt settles with.
    #[sea_orm(
        belongs_to = "super::purchasers::Entity",
        from = "Column::PurchaserId",
        to = "super::purchasers::Column::Id"
    )]
    Purchasers,
}

impl Related<super::purchasers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchasers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

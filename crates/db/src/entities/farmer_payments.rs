//! `SeaORM` entity for the farmer_payments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentMode;

/// A payment of money from the firm to a farmer. Write-once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "farmer_payments")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Settlement date.
    pub date: Date,
    /// The farmer paid.
    pub farmer_id: Uuid,
    /// Settlement mode.
    pub mode: PaymentMode,
    /// Amount paid.
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
    /// The farmer this payment settles with.
    #[sea_orm(
        belongs_to = "super::farmers::Entity",
        from = "Column::FarmerId",
        to = "super::farmers::Column::Id"
    )]
    Farmers,
}

impl Related<super::farmers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` entity for the purchasers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A purchaser (trading company) buying banana lots through the firm.
///
/// `current_balance` is derived and recalculator-owned, like the farmer's.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "purchasers")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Registered company name.
    pub company_name: String,
    /// Contact person at the company.
    pub contact_person: Option<String>,
    /// Contact mobile number.
    pub mobile: Option<String>,
    /// GST registration number.
    pub gst_number: Option<String>,
    /// Informal credit limit extended to the purchaser.
    pub credit_limit: Decimal,
    /// Balance carried over from before the ledger; positive means the
    /// purchaser owes the firm.
    pub opening_balance: Decimal,
    /// Derived balance, recomputed from the full history after every
    /// mutation touching this purchaser.
    pub current_balance: Decimal,
    /// Soft-activity flag.
    pub is_active: bool,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last row update time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Trades bought by this purchaser.
    #[sea_orm(has_many = "super::trade_entries::Entity")]
    TradeEntries,
    /// Receipts collected from this purchaser.
    #[sea_orm(has_many = "super::purchaser_receipts::Entity")]
    PurchaserReceipts,
}

impl Related<super::trade_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeEntries.def()
    }
}

impl Related<super::purchaser_receipts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaserReceipts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

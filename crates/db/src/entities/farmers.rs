//! `SeaORM` entity for the farmers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A farmer who sells banana lots through the firm.
///
/// `current_balance` is derived: it is only ever written by the balance
/// recalculator, never set directly by callers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "farmers")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Farmer name.
    pub name: String,
    /// Primary mobile number.
    pub mobile: Option<String>,
    /// Alternate mobile number.
    pub alt_mobile: Option<String>,
    /// Village.
    pub village: Option<String>,
    /// Bank account number for settlements.
    pub bank_account: Option<String>,
    /// Bank IFSC code.
    pub bank_ifsc: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Balance carried over from before the ledger; positive means the firm
    /// owes the farmer.
    pub opening_balance: Decimal,
    /// Derived balance, recomputed from the full history after every
    /// mutation touching this farmer.
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
    /// Trades sold by this farmer.
    #[sea_orm(has_many = "super::trade_entries::Entity")]
    TradeEntries,
    /// Payments made to this farmer.
    #[sea_orm(has_many = "super::farmer_payments::Entity")]
    FarmerPayments,
}

impl Related<super::trade_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeEntries.def()
    }
}

impl Related<super::farmer_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FarmerPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` entity for the trade_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One banana-lot transaction between a farmer and a purchaser.
///
/// The three derived columns (`gross_amount`, `total_deductions`,
/// `net_amount`) always satisfy the derivation formula over the six raw
/// inputs; the repositories recompute them together before every write.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_entries")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Trade date.
    pub date: Date,
    /// Serial number on the day's lot sheet.
    pub sr_no: Option<i32>,
    /// Auction board number.
    pub board_no: Option<String>,
    /// Vehicle number of the lot.
    pub gaadi_no: Option<String>,
    /// Agreed trade rate for the lot.
    pub bhaav: Decimal,
    /// Lot weight in kilograms.
    pub weight: Decimal,
    /// Fixed count-based deduction.
    pub lungar: Decimal,
    /// Market-yard tax amount.
    pub mandi_tax: Decimal,
    /// Firm commission.
    pub commission: Decimal,
    /// Labor/handling charge.
    pub majduri: Decimal,
    /// The farmer who sold the lot.
    pub farmer_id: Uuid,
    /// The purchaser who bought the lot.
    pub purchaser_id: Uuid,
    /// Derived: `round2(bhaav * weight)`.
    pub gross_amount: Decimal,
    /// Derived: `round2(lungar + mandi_tax + commission + majduri)`.
    pub total_deductions: Decimal,
    /// Derived: `round2(gross_amount - total_deductions)`.
    pub net_amount: Decimal,
    /// Free-text remarks.
    pub remarks: Option<String>,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last row update time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The selling farmer.
    #[sea_orm(
        belongs_to = "super::farmers::Entity",
        from = "Column::FarmerId",
        to = "super::farmers::Column::Id"
    )]
    Farmers,
    /// The buying purchaser.
    #[sea_orm(
        belongs_to = "super::purchasers::Entity",
        from = "Column::PurchaserId",
        to = "super::purchasers::Column::Id"
    )]
    Purchasers,
}

impl Related<super::farmers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmers.def()
    }
}

impl Related<super::purchasers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchasers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` entity definitions for the ledger schema.

pub mod farmer_payments;
pub mod farmers;
pub mod firm_transactions;
pub mod purchaser_receipts;
pub mod purchasers;
pub mod sea_orm_active_enums;
pub mod trade_entries;

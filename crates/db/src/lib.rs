//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! The repositories are also where the ledger's persist-then-recalculate
//! orchestration lives: every mutation of a trade or payment ends by
//! recomputing the affected parties' balances from the full history.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    BalanceRepository, FarmerRepository, PartyLocks, PaymentRepository, PurchaserRepository,
    ReportRepository, TradeRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

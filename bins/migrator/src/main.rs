//! Migration runner for the Mandi ledger schema.
//!
//! Wraps the sea-orm-migration CLI: `migrator up` applies pending
//! migrations, `down` rolls back, `status` lists applied migrations, and
//! `fresh` drops everything and reapplies. Reads `DATABASE_URL` from the
//! environment or a `.env` file.

use sea_orm_migration::prelude::*;

use mandi_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    cli::run_cli(Migrator).await;
}

//! Initial database migration.
//!
//! Creates the enum types, ledger tables, and indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(FARMERS_SQL).await?;
        db.execute_unprepared(PURCHASERS_SQL).await?;
        db.execute_unprepared(TRADE_ENTRIES_SQL).await?;
        db.execute_unprepared(FARMER_PAYMENTS_SQL).await?;
        db.execute_unprepared(PURCHASER_RECEIPTS_SQL).await?;
        db.execute_unprepared(FIRM_TRANSACTIONS_SQL).await?;
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Settlement modes
CREATE TYPE payment_mode AS ENUM ('cash', 'bank', 'upi', 'cheque');

-- Cash-flow direction
CREATE TYPE flow_kind AS ENUM ('income', 'expense', 'transfer');

-- Firm accounts
CREATE TYPE cash_account AS ENUM ('cash', 'bank');

-- Counterparty classification
CREATE TYPE counterparty_kind AS ENUM ('farmer', 'purchaser', 'other');
";

const FARMERS_SQL: &str = r"
CREATE TABLE farmers (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    mobile TEXT,
    alt_mobile TEXT,
    village TEXT,
    bank_account TEXT,
    bank_ifsc TEXT,
    notes TEXT,
    opening_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    current_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const PURCHASERS_SQL: &str = r"
CREATE TABLE purchasers (
    id UUID PRIMARY KEY,
    company_name TEXT NOT NULL,
    contact_person TEXT,
    mobile TEXT,
    gst_number TEXT,
    credit_limit NUMERIC(14, 2) NOT NULL DEFAULT 0,
    opening_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    current_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const TRADE_ENTRIES_SQL: &str = r"
CREATE TABLE trade_entries (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    sr_no INTEGER,
    board_no TEXT,
    gaadi_no TEXT,
    bhaav NUMERIC(14, 2) NOT NULL,
    weight NUMERIC(14, 2) NOT NULL,
    lungar NUMERIC(14, 2) NOT NULL DEFAULT 0,
    mandi_tax NUMERIC(14, 2) NOT NULL DEFAULT 0,
    commission NUMERIC(14, 2) NOT NULL DEFAULT 0,
    majduri NUMERIC(14, 2) NOT NULL DEFAULT 0,
    farmer_id UUID NOT NULL REFERENCES farmers(id),
    purchaser_id UUID NOT NULL REFERENCES purchasers(id),
    gross_amount NUMERIC(18, 2) NOT NULL,
    total_deductions NUMERIC(14, 2) NOT NULL,
    net_amount NUMERIC(18, 2) NOT NULL,
    remarks TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const FARMER_PAYMENTS_SQL: &str = r"
CREATE TABLE farmer_payments (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    farmer_id UUID NOT NULL REFERENCES farmers(id),
    mode payment_mode NOT NULL DEFAULT 'cash',
    amount NUMERIC(14, 2) NOT NULL,
    reference TEXT,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const PURCHASER_RECEIPTS_SQL: &str = r"
CREATE TABLE purchaser_receipts (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    purchaser_id UUID NOT NULL REFERENCES purchasers(id),
    mode payment_mode NOT NULL DEFAULT 'bank',
    amount NUMERIC(14, 2) NOT NULL,
    reference TEXT,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const FIRM_TRANSACTIONS_SQL: &str = r"
CREATE TABLE firm_transactions (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    kind flow_kind NOT NULL,
    account cash_account NOT NULL DEFAULT 'bank',
    category TEXT NOT NULL DEFAULT 'general',
    amount NUMERIC(14, 2) NOT NULL,
    counterparty_kind counterparty_kind NOT NULL DEFAULT 'other',
    counterparty_id UUID,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_farmers_name ON farmers(name);
CREATE INDEX idx_purchasers_company_name ON purchasers(company_name);
CREATE INDEX idx_trade_entries_date_farmer ON trade_entries(date, farmer_id);
CREATE INDEX idx_trade_entries_date_purchaser ON trade_entries(date, purchaser_id);
CREATE INDEX idx_farmer_payments_farmer_date ON farmer_payments(farmer_id, date);
CREATE INDEX idx_purchaser_receipts_purchaser_date ON purchaser_receipts(purchaser_id, date);
CREATE INDEX idx_firm_transactions_date_account ON firm_transactions(date, account);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS firm_transactions;
DROP TABLE IF EXISTS purchaser_receipts;
DROP TABLE IF EXISTS farmer_payments;
DROP TABLE IF EXISTS trade_entries;
DROP TABLE IF EXISTS purchasers;
DROP TABLE IF EXISTS farmers;
DROP TYPE IF EXISTS counterparty_kind;
DROP TYPE IF EXISTS cash_account;
DROP TYPE IF EXISTS flow_kind;
DROP TYPE IF EXISTS payment_mode;
";

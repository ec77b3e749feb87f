//! Payment recorder.
//!
//! Records farmer payments and purchaser receipts, mirrors each into the
//! firm-wide cash-flow ledger, and triggers balance recalculation for the
//! affected party. The payment row and its mirror are written in one
//! database transaction so no partial effect is observable.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

use mandi_core::payment::{
    MirrorEntry, PaymentMode, PaymentValidationError, farmer_payment_mirror,
    purchaser_receipt_mirror, validate_amount,
};
use mandi_shared::types::{FarmerId, FirmTransactionId, FarmerPaymentId, PurchaserId, PurchaserReceiptId};

use crate::entities::{farmer_payments, farmers, firm_transactions, purchaser_receipts, purchasers};

use super::balance::{BalanceError, BalanceRepository, PartyLocks};

/// Error types for payment operations.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The payment failed validation; nothing was persisted.
    #[error(transparent)]
    Invalid(#[from] PaymentValidationError),

    /// Referenced farmer not found.
    #[error("Farmer not found: {0}")]
    FarmerNotFound(Uuid),

    /// Referenced purchaser not found.
    #[error("Purchaser not found: {0}")]
    PurchaserNotFound(Uuid),

    /// The payment and its mirror were persisted but the balance
    /// recalculation failed, so the stored balance is stale. Recoverable:
    /// retry the recalculation.
    #[error("Balance recalculation failed after persisting payment {payment_id}: {source}")]
    Recalculation {
        /// The persisted payment/receipt.
        payment_id: Uuid,
        /// The underlying recalculation failure.
        #[source]
        source: BalanceError,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for paying a farmer.
#[derive(Debug, Clone)]
pub struct PayFarmerInput {
    /// The farmer to pay.
    pub farmer_id: FarmerId,
    /// Amount to pay; must be positive.
    pub amount: Decimal,
    /// Settlement mode.
    pub mode: PaymentMode,
    /// Transaction id / cheque number.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Settlement date.
    pub date: NaiveDate,
}

/// Input for receiving money from a purchaser.
#[derive(Debug, Clone)]
pub struct ReceiveFromPurchaserInput {
    /// The purchaser to receive from.
    pub purchaser_id: PurchaserId,
    /// Amount received; must be positive.
    pub amount: Decimal,
    /// Settlement mode.
    pub mode: PaymentMode,
    /// Transaction id / cheque number.
    pub reference: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Settlement date.
    pub date: NaiveDate,
}

/// Repository for payments and receipts with cash-flow mirroring.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
    balances: BalanceRepository,
}

impl PaymentRepository {
    /// Creates a new payment repository sharing the given lock registry.
    #[must_use]
    pub fn new(db: DatabaseConnection, locks: Arc<PartyLocks>) -> Self {
        let balances = BalanceRepository::new(db.clone(), locks);
        Self { db, balances }
    }

    /// Records a payment from the firm to a farmer.
    ///
    /// There is no check against the outstanding balance: overpayment is
    /// permitted and drives the farmer's balance negative.
    pub async fn pay_farmer(
        &self,
        input: PayFarmerInput,
    ) -> Result<farmer_payments::Model, PaymentError> {
        validate_amount(input.amount)?;

        farmers::Entity::find_by_id(input.farmer_id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(PaymentError::FarmerNotFound(input.farmer_id.into_inner()))?;

        let mirror = farmer_payment_mirror(input.mode);
        let now = chrono::Utc::now();

        let txn = self.db.begin().await?;

        let payment = farmer_payments::ActiveModel {
            id: Set(FarmerPaymentId::new().into_inner()),
            date: Set(input.date),
            farmer_id: Set(input.farmer_id.into_inner()),
            mode: Set(input.mode.into()),
            amount: Set(input.amount),
            reference: Set(input.reference.clone()),
            notes: Set(input.notes),
            created_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        self.insert_mirror(
            &txn,
            input.date,
            mirror,
            input.amount,
            Some(input.farmer_id.into_inner()),
            input.reference,
        )
        .await?;

        txn.commit().await?;
        info!(payment_id = %payment.id, farmer_id = %payment.farmer_id, amount = %payment.amount, "Farmer paid");

        self.balances
            .recalc_farmer_balance(input.farmer_id)
            .await
            .map_err(|source| PaymentError::Recalculation {
                payment_id: payment.id,
                source,
            })?;

        Ok(payment)
    }

    /// Records a receipt of money from a purchaser to the firm.
    ///
    /// Overpayment is permitted, as for farmer payments.
    pub async fn receive_from_purchaser(
        &self,
        input: ReceiveFromPurchaserInput,
    ) -> Result<purchaser_receipts::Model, PaymentError> {
        validate_amount(input.amount)?;

        purchasers::Entity::find_by_id(input.purchaser_id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(PaymentError::PurchaserNotFound(
                input.purchaser_id.into_inner(),
            ))?;

        let mirror = purchaser_receipt_mirror(input.mode);
        let now = chrono::Utc::now();

        let txn = self.db.begin().await?;

        let receipt = purchaser_receipts::ActiveModel {
            id: Set(PurchaserReceiptId::new().into_inner()),
            date: Set(input.date),
            purchaser_id: Set(input.purchaser_id.into_inner()),
            mode: Set(input.mode.into()),
            amount: Set(input.amount),
            reference: Set(input.reference.clone()),
            notes: Set(input.notes),
            created_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        self.insert_mirror(
            &txn,
            input.date,
            mirror,
            input.amount,
            Some(input.purchaser_id.into_inner()),
            input.reference,
        )
        .await?;

        txn.commit().await?;
        info!(receipt_id = %receipt.id, purchaser_id = %receipt.purchaser_id, amount = %receipt.amount, "Purchaser receipt recorded");

        self.balances
            .recalc_purchaser_balance(input.purchaser_id)
            .await
            .map_err(|source| PaymentError::Recalculation {
                payment_id: receipt.id,
                source,
            })?;

        Ok(receipt)
    }

    /// Appends the mirrored firm cash-flow row inside the settlement's
    /// database transaction. The settlement reference travels in the
    /// mirror's notes.
    async fn insert_mirror(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        date: NaiveDate,
        mirror: MirrorEntry,
        amount: Decimal,
        counterparty_id: Option<Uuid>,
        reference: Option<String>,
    ) -> Result<(), DbErr> {
        firm_transactions::ActiveModel {
            id: Set(FirmTransactionId::new().into_inner()),
            date: Set(date),
            kind: Set(mirror.kind.into()),
            account: Set(mirror.account.into()),
            category: Set(mirror.category.to_string()),
            amount: Set(amount),
            counterparty_kind: Set(mirror.counterparty.into()),
            counterparty_id: Set(counterparty_id),
            notes: Set(reference),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(txn)
        .await?;

        Ok(())
    }
}

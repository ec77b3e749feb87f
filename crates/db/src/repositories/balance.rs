//! Balance recalculation for farmers and purchasers.
//!
//! A party's `current_balance` is a materialized view over its full history
//! of trades, payments, and the opening balance. The recalculators here
//! always re-read the whole history and overwrite the stored value, so the
//! result is idempotent and immune to incremental-update drift. This is the
//! only code path that writes `current_balance`.

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;
use uuid::Uuid;

use mandi_core::balance::{BalanceInputs, current_balance};
use mandi_shared::types::{FarmerId, PurchaserId};

use crate::entities::{farmer_payments, farmers, purchaser_receipts, purchasers, trade_entries};

/// Error types for balance recalculation.
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    /// Farmer not found.
    #[error("Farmer not found: {0}")]
    FarmerNotFound(Uuid),

    /// Purchaser not found.
    #[error("Purchaser not found: {0}")]
    PurchaserNotFound(Uuid),

    /// Database error. When this surfaces after a trade or payment has been
    /// persisted, the stored balance is stale and the caller should retry
    /// the recalculation.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Per-party serialization locks.
///
/// The read-then-write recalculation sequence is not atomic at the database
/// level, so two near-simultaneous mutations touching the same party could
/// otherwise race and leave a stale balance. One lock per party id keeps
/// recalculation serialized per party while different parties proceed
/// independently. Share a single instance across all repositories.
#[derive(Debug, Default)]
pub struct PartyLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl PartyLocks {
    /// Creates an empty lock registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one party id, creating it on first use.
    pub(crate) async fn acquire(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(&self.locks.entry(id).or_default());
        lock.lock_owned().await
    }
}

/// Repository recomputing stored party balances from the full history.
#[derive(Debug, Clone)]
pub struct BalanceRepository {
    db: DatabaseConnection,
    locks: Arc<PartyLocks>,
}

impl BalanceRepository {
    /// Creates a new balance repository sharing the given lock registry.
    #[must_use]
    pub const fn new(db: DatabaseConnection, locks: Arc<PartyLocks>) -> Self {
        Self { db, locks }
    }

    /// Recomputes and stores a farmer's current balance.
    ///
    /// `opening + Σ(net_amount of their trades) − Σ(payments to them)`;
    /// positive means the firm still owes the farmer.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::FarmerNotFound`] if the farmer does not exist
    /// at call time; the caller must not proceed as if the balance were
    /// updated.
    pub async fn recalc_farmer_balance(&self, id: FarmerId) -> Result<Decimal, BalanceError> {
        let _guard = self.locks.acquire(id.into_inner()).await;

        let farmer = farmers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(BalanceError::FarmerNotFound(id.into_inner()))?;

        let trade_net_sum: Decimal = trade_entries::Entity::find()
            .filter(trade_entries::Column::FarmerId.eq(id.into_inner()))
            .all(&self.db)
            .await?
            .iter()
            .map(|trade| trade.net_amount)
            .sum();

        let settled_sum: Decimal = farmer_payments::Entity::find()
            .filter(farmer_payments::Column::FarmerId.eq(id.into_inner()))
            .all(&self.db)
            .await?
            .iter()
            .map(|payment| payment.amount)
            .sum();

        let new_balance = current_balance(BalanceInputs {
            opening_balance: farmer.opening_balance,
            trade_net_sum,
            settled_sum,
        });

        let mut active: farmers::ActiveModel = farmer.into();
        active.current_balance = Set(new_balance);
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await?;

        debug!(farmer_id = %id, balance = %new_balance, "Recalculated farmer balance");
        Ok(new_balance)
    }

    /// Recomputes and stores a purchaser's current balance.
    ///
    /// `opening + Σ(net_amount of their trades) − Σ(receipts from them)`;
    /// positive means the purchaser still owes the firm.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::PurchaserNotFound`] if the purchaser does not
    /// exist at call time.
    pub async fn recalc_purchaser_balance(
        &self,
        id: PurchaserId,
    ) -> Result<Decimal, BalanceError> {
        let _guard = self.locks.acquire(id.into_inner()).await;

        let purchaser = purchasers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(BalanceError::PurchaserNotFound(id.into_inner()))?;

        let trade_net_sum: Decimal = trade_entries::Entity::find()
            .filter(trade_entries::Column::PurchaserId.eq(id.into_inner()))
            .all(&self.db)
            .await?
            .iter()
            .map(|trade| trade.net_amount)
            .sum();

        let settled_sum: Decimal = purchaser_receipts::Entity::find()
            .filter(purchaser_receipts::Column::PurchaserId.eq(id.into_inner()))
            .all(&self.db)
            .await?
            .iter()
            .map(|receipt| receipt.amount)
            .sum();

        let new_balance = current_balance(BalanceInputs {
            opening_balance: purchaser.opening_balance,
            trade_net_sum,
            settled_sum,
        });

        let mut active: purchasers::ActiveModel = purchaser.into();
        active.current_balance = Set(new_balance);
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await?;

        debug!(purchaser_id = %id, balance = %new_balance, "Recalculated purchaser balance");
        Ok(new_balance)
    }
}

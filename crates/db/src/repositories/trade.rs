//! Trade lifecycle repository.
//!
//! Creates, updates, and deletes trade entries, and triggers balance
//! recalculation for every party whose balance could have changed. A trade
//! has no intermediate states: it either exists with self-consistent derived
//! totals, or it does not exist.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set,
};
use tracing::info;
use uuid::Uuid;

use mandi_core::trade::{
    TradeDraft, TradeFigures, TradeUpdate, TradeValidationError, derive_totals, validate_draft,
    validate_figures,
};
use mandi_shared::types::{FarmerId, PurchaserId, TradeId};

use crate::entities::{farmers, purchasers, trade_entries};

use super::balance::{BalanceError, BalanceRepository, PartyLocks};

/// Error types for trade lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    /// The trade payload failed validation; nothing was persisted.
    #[error(transparent)]
    Invalid(#[from] TradeValidationError),

    /// Trade not found.
    #[error("Trade not found: {0}")]
    NotFound(Uuid),

    /// Referenced farmer not found.
    #[error("Farmer not found: {0}")]
    FarmerNotFound(Uuid),

    /// Referenced purchaser not found.
    #[error("Purchaser not found: {0}")]
    PurchaserNotFound(Uuid),

    /// The trade row was persisted but a balance recalculation failed, so a
    /// stored balance is stale. Recoverable: retry the recalculation.
    #[error("Balance recalculation failed after persisting trade {trade_id}: {source}")]
    Recalculation {
        /// The persisted trade.
        trade_id: Uuid,
        /// The underlying recalculation failure.
        #[source]
        source: BalanceError,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for trade entries with balance-recalculation orchestration.
#[derive(Debug, Clone)]
pub struct TradeRepository {
    db: DatabaseConnection,
    balances: BalanceRepository,
}

impl TradeRepository {
    /// Creates a new trade repository sharing the given lock registry.
    #[must_use]
    pub fn new(db: DatabaseConnection, locks: Arc<PartyLocks>) -> Self {
        let balances = BalanceRepository::new(db.clone(), locks);
        Self { db, balances }
    }

    /// Creates a trade entry.
    ///
    /// Validates the draft, derives the persisted totals, inserts the row,
    /// then recalculates both parties' balances. The two recalculations
    /// touch disjoint rows and run concurrently.
    pub async fn create(&self, draft: TradeDraft) -> Result<trade_entries::Model, TradeError> {
        let trade = validate_draft(draft)?;

        self.ensure_farmer_exists(trade.farmer_id).await?;
        self.ensure_purchaser_exists(trade.purchaser_id).await?;

        let totals = derive_totals(&trade.figures);
        let now = chrono::Utc::now();

        let model = trade_entries::ActiveModel {
            id: Set(TradeId::new().into_inner()),
            date: Set(trade.date),
            sr_no: Set(trade.sr_no),
            board_no: Set(trade.board_no),
            gaadi_no: Set(trade.gaadi_no),
            bhaav: Set(trade.figures.bhaav),
            weight: Set(trade.figures.weight),
            lungar: Set(trade.figures.lungar),
            mandi_tax: Set(trade.figures.mandi_tax),
            commission: Set(trade.figures.commission),
            majduri: Set(trade.figures.majduri),
            farmer_id: Set(trade.farmer_id.into_inner()),
            purchaser_id: Set(trade.purchaser_id.into_inner()),
            gross_amount: Set(totals.gross_amount),
            total_deductions: Set(totals.total_deductions),
            net_amount: Set(totals.net_amount),
            remarks: Set(trade.remarks),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let saved = model.insert(&self.db).await?;
        info!(trade_id = %saved.id, net = %saved.net_amount, "Trade created");

        self.recalc_pair(saved.id, saved.farmer_id, saved.purchaser_id)
            .await?;

        Ok(saved)
    }

    /// Applies a partial update to a trade entry.
    ///
    /// When any monetary input is present, the derived totals are recomputed
    /// from the merged view of the persisted row and the update, never from
    /// the update alone. Balances are then recalculated for the trade's
    /// current parties and, if the update reassigned the farmer or
    /// purchaser, for the previous ones too, so no stale balance is left
    /// behind.
    pub async fn update(
        &self,
        id: TradeId,
        update: TradeUpdate,
    ) -> Result<trade_entries::Model, TradeError> {
        let existing = trade_entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(TradeError::NotFound(id.into_inner()))?;

        let prev_farmer_id = existing.farmer_id;
        let prev_purchaser_id = existing.purchaser_id;

        if let Some(farmer_id) = update.farmer_id {
            self.ensure_farmer_exists(farmer_id).await?;
        }
        if let Some(purchaser_id) = update.purchaser_id {
            self.ensure_purchaser_exists(purchaser_id).await?;
        }

        let current_figures = TradeFigures {
            bhaav: existing.bhaav,
            weight: existing.weight,
            lungar: existing.lungar,
            mandi_tax: existing.mandi_tax,
            commission: existing.commission,
            majduri: existing.majduri,
        };

        let mut active: trade_entries::ActiveModel = existing.into();

        if let Some(date) = update.date {
            active.date = Set(date);
        }
        if let Some(sr_no) = update.sr_no {
            active.sr_no = Set(Some(sr_no));
        }
        if let Some(board_no) = update.board_no.clone() {
            active.board_no = Set(Some(board_no));
        }
        if let Some(gaadi_no) = update.gaadi_no.clone() {
            active.gaadi_no = Set(Some(gaadi_no));
        }
        if let Some(farmer_id) = update.farmer_id {
            active.farmer_id = Set(farmer_id.into_inner());
        }
        if let Some(purchaser_id) = update.purchaser_id {
            active.purchaser_id = Set(purchaser_id.into_inner());
        }
        if let Some(remarks) = update.remarks.clone() {
            active.remarks = Set(Some(remarks));
        }

        if update.touches_money() {
            let figures = update.merged_figures(&current_figures);
            validate_figures(&figures)?;
            let totals = derive_totals(&figures);

            active.bhaav = Set(figures.bhaav);
            active.weight = Set(figures.weight);
            active.lungar = Set(figures.lungar);
            active.mandi_tax = Set(figures.mandi_tax);
            active.commission = Set(figures.commission);
            active.majduri = Set(figures.majduri);
            active.gross_amount = Set(totals.gross_amount);
            active.total_deductions = Set(totals.total_deductions);
            active.net_amount = Set(totals.net_amount);
        }

        active.updated_at = Set(chrono::Utc::now().into());
        let saved = active.update(&self.db).await?;
        info!(trade_id = %saved.id, net = %saved.net_amount, "Trade updated");

        self.recalc_pair(saved.id, saved.farmer_id, saved.purchaser_id)
            .await?;

        if prev_farmer_id != saved.farmer_id {
            self.balances
                .recalc_farmer_balance(FarmerId::from_uuid(prev_farmer_id))
                .await
                .map_err(|source| TradeError::Recalculation {
                    trade_id: saved.id,
                    source,
                })?;
        }
        if prev_purchaser_id != saved.purchaser_id {
            self.balances
                .recalc_purchaser_balance(PurchaserId::from_uuid(prev_purchaser_id))
                .await
                .map_err(|source| TradeError::Recalculation {
                    trade_id: saved.id,
                    source,
                })?;
        }

        Ok(saved)
    }

    /// Deletes a trade entry. Idempotent: returns `false` when no trade with
    /// this id exists, `true` after removal and recalculation of both former
    /// parties' balances.
    pub async fn delete(&self, id: TradeId) -> Result<bool, TradeError> {
        let Some(existing) = trade_entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
        else {
            return Ok(false);
        };

        let farmer_id = existing.farmer_id;
        let purchaser_id = existing.purchaser_id;

        trade_entries::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        info!(trade_id = %id, "Trade deleted");

        self.recalc_pair(id.into_inner(), farmer_id, purchaser_id)
            .await?;

        Ok(true)
    }

    /// Recalculates both parties of a trade concurrently.
    async fn recalc_pair(
        &self,
        trade_id: Uuid,
        farmer_id: Uuid,
        purchaser_id: Uuid,
    ) -> Result<(), TradeError> {
        tokio::try_join!(
            self.balances
                .recalc_farmer_balance(FarmerId::from_uuid(farmer_id)),
            self.balances
                .recalc_purchaser_balance(PurchaserId::from_uuid(purchaser_id)),
        )
        .map_err(|source| TradeError::Recalculation { trade_id, source })?;

        Ok(())
    }

    async fn ensure_farmer_exists(&self, id: FarmerId) -> Result<(), TradeError> {
        farmers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(|_| ())
            .ok_or(TradeError::FarmerNotFound(id.into_inner()))
    }

    async fn ensure_purchaser_exists(&self, id: PurchaserId) -> Result<(), TradeError> {
        purchasers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(|_| ())
            .ok_or(TradeError::PurchaserNotFound(id.into_inner()))
    }
}

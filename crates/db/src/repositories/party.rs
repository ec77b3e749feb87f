//! Farmer and purchaser repositories.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use mandi_shared::types::{FarmerId, PurchaserId};

use crate::entities::{farmers, purchasers};

/// Error types for party operations.
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    /// Farmer not found.
    #[error("Farmer not found: {0}")]
    FarmerNotFound(Uuid),

    /// Purchaser not found.
    #[error("Purchaser not found: {0}")]
    PurchaserNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for registering a farmer.
#[derive(Debug, Clone)]
pub struct CreateFarmerInput {
    /// Farmer name.
    pub name: String,
    /// Primary mobile number.
    pub mobile: Option<String>,
    /// Alternate mobile number.
    pub alt_mobile: Option<String>,
    /// Village.
    pub village: Option<String>,
    /// Bank account number.
    pub bank_account: Option<String>,
    /// Bank IFSC code.
    pub bank_ifsc: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Balance carried over from before the ledger.
    pub opening_balance: Decimal,
}

/// Input for registering a purchaser.
#[derive(Debug, Clone)]
pub struct CreatePurchaserInput {
    /// Registered company name.
    pub company_name: String,
    /// Contact person at the company.
    pub contact_person: Option<String>,
    /// Contact mobile number.
    pub mobile: Option<String>,
    /// GST registration number.
    pub gst_number: Option<String>,
    /// Informal credit limit.
    pub credit_limit: Decimal,
    /// Balance carried over from before the ledger.
    pub opening_balance: Decimal,
}

/// Repository for farmer records.
#[derive(Debug, Clone)]
pub struct FarmerRepository {
    db: DatabaseConnection,
}

impl FarmerRepository {
    /// Creates a new farmer repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a farmer.
    ///
    /// With no history yet, `current_balance` starts equal to the opening
    /// balance; it is recalculator-owned from here on.
    pub async fn create(&self, input: CreateFarmerInput) -> Result<farmers::Model, PartyError> {
        let now = chrono::Utc::now();
        let model = farmers::ActiveModel {
            id: Set(FarmerId::new().into_inner()),
            name: Set(input.name),
            mobile: Set(input.mobile),
            alt_mobile: Set(input.alt_mobile),
            village: Set(input.village),
            bank_account: Set(input.bank_account),
            bank_ifsc: Set(input.bank_ifsc),
            notes: Set(input.notes),
            opening_balance: Set(input.opening_balance),
            current_balance: Set(input.opening_balance),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Lists farmers sorted by name.
    pub async fn list(&self) -> Result<Vec<farmers::Model>, PartyError> {
        Ok(farmers::Entity::find()
            .order_by_asc(farmers::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Finds a farmer by id.
    pub async fn find(&self, id: FarmerId) -> Result<farmers::Model, PartyError> {
        farmers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(PartyError::FarmerNotFound(id.into_inner()))
    }
}

/// Repository for purchaser records.
#[derive(Debug, Clone)]
pub struct PurchaserRepository {
    db: DatabaseConnection,
}

impl PurchaserRepository {
    /// Creates a new purchaser repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a purchaser. `current_balance` starts at the opening
    /// balance, as for farmers.
    pub async fn create(
        &self,
        input: CreatePurchaserInput,
    ) -> Result<purchasers::Model, PartyError> {
        let now = chrono::Utc::now();
        let model = purchasers::ActiveModel {
            id: Set(PurchaserId::new().into_inner()),
            company_name: Set(input.company_name),
            contact_person: Set(input.contact_person),
            mobile: Set(input.mobile),
            gst_number: Set(input.gst_number),
            credit_limit: Set(input.credit_limit),
            opening_balance: Set(input.opening_balance),
            current_balance: Set(input.opening_balance),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Lists purchasers sorted by company name.
    pub async fn list(&self) -> Result<Vec<purchasers::Model>, PartyError> {
        Ok(purchasers::Entity::find()
            .order_by_asc(purchasers::Column::CompanyName)
            .all(&self.db)
            .await?)
    }

    /// Finds a purchaser by id.
    pub async fn find(&self, id: PurchaserId) -> Result<purchasers::Model, PartyError> {
        purchasers::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(PartyError::PurchaserNotFound(id.into_inner()))
    }
}

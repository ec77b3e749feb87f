//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! The trade and payment repositories also own the persist-then-recalculate
//! orchestration that keeps party balances consistent.

pub mod balance;
pub mod party;
pub mod payment;
pub mod report;
pub mod trade;

pub use balance::{BalanceError, BalanceRepository, PartyLocks};
pub use party::{CreateFarmerInput, CreatePurchaserInput, FarmerRepository, PartyError, PurchaserRepository};
pub use payment::{PayFarmerInput, PaymentError, PaymentRepository, ReceiveFromPurchaserInput};
pub use report::{FarmerLedger, FirmCashFlow, PurchaserLedger, ReportError, ReportRepository};
pub use trade::{TradeError, TradeRepository};

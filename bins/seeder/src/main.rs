//! Database seeder for Mandi development and testing.
//!
//! Seeds a couple of farmers and purchasers plus a day of trades and one
//! settlement each way, so the reports have something to show.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use mandi_core::payment::PaymentMode;
use mandi_core::trade::TradeDraft;
use mandi_db::repositories::party::{CreateFarmerInput, CreatePurchaserInput};
use mandi_db::repositories::payment::{PayFarmerInput, ReceiveFromPurchaserInput};
use mandi_db::{
    FarmerRepository, PartyLocks, PaymentRepository, PurchaserRepository, TradeRepository,
};
use mandi_shared::types::{FarmerId, PurchaserId};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = mandi_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    let locks = Arc::new(PartyLocks::new());

    println!("Seeding farmers...");
    let farmers = FarmerRepository::new(db.clone());
    let ramesh = farmers
        .create(CreateFarmerInput {
            name: "Ramesh Patil".to_string(),
            mobile: Some("9822011001".to_string()),
            alt_mobile: None,
            village: Some("Raver".to_string()),
            bank_account: Some("30112200451".to_string()),
            bank_ifsc: Some("SBIN0000456".to_string()),
            notes: None,
            opening_balance: dec!(1000),
        })
        .await
        .expect("Failed to seed farmer");
    let suresh = farmers
        .create(CreateFarmerInput {
            name: "Suresh Mahajan".to_string(),
            mobile: Some("9822011002".to_string()),
            alt_mobile: None,
            village: Some("Yawal".to_string()),
            bank_account: None,
            bank_ifsc: None,
            notes: Some("Prefers cash settlements".to_string()),
            opening_balance: Decimal::ZERO,
        })
        .await
        .expect("Failed to seed farmer");

    println!("Seeding purchasers...");
    let purchasers = PurchaserRepository::new(db.clone());
    let khandesh = purchasers
        .create(CreatePurchaserInput {
            company_name: "Khandesh Fruit Co".to_string(),
            contact_person: Some("A. Chaudhari".to_string()),
            mobile: Some("9822022001".to_string()),
            gst_number: Some("27AAACK1234F1Z5".to_string()),
            credit_limit: dec!(500000),
            opening_balance: Decimal::ZERO,
        })
        .await
        .expect("Failed to seed purchaser");

    println!("Seeding trades...");
    let trades = TradeRepository::new(db.clone(), Arc::clone(&locks));
    let date = NaiveDate::from_ymd_opt(2026, 7, 14).expect("valid date");
    for (sr_no, farmer, bhaav, weight) in [
        (1, ramesh.id, dec!(2500), dec!(200)),
        (2, suresh.id, dec!(2350), dec!(140)),
    ] {
        trades
            .create(TradeDraft {
                date,
                sr_no: Some(sr_no),
                board_no: Some("B-7".to_string()),
                gaadi_no: Some("MH19-AB-4521".to_string()),
                farmer_id: FarmerId::from_uuid(farmer),
                purchaser_id: PurchaserId::from_uuid(khandesh.id),
                bhaav: Some(bhaav),
                weight: Some(weight),
                lungar: dec!(20),
                mandi_tax: dec!(50),
                commission: dec!(100),
                majduri: dec!(75),
                remarks: None,
            })
            .await
            .expect("Failed to seed trade");
    }

    println!("Seeding settlements...");
    let payments = PaymentRepository::new(db.clone(), Arc::clone(&locks));
    payments
        .pay_farmer(PayFarmerInput {
            farmer_id: FarmerId::from_uuid(ramesh.id),
            amount: dec!(2000),
            mode: PaymentMode::Cash,
            reference: None,
            notes: Some("Advance against lot".to_string()),
            date,
        })
        .await
        .expect("Failed to seed farmer payment");
    payments
        .receive_from_purchaser(ReceiveFromPurchaserInput {
            purchaser_id: PurchaserId::from_uuid(khandesh.id),
            amount: dec!(100000),
            mode: PaymentMode::Bank,
            reference: Some("NEFT-88412".to_string()),
            notes: None,
            date,
        })
        .await
        .expect("Failed to seed purchaser receipt");

    println!("Seeding complete!");
}

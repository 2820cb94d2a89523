//! Demo data seeding
//!
//! Populates the store with a verified demo user, saved recipients, and a
//! short transaction history so the dashboard has data on first boot.
//! Only runs when demo mode is enabled; exchange rates are seeded by the
//! store itself regardless.

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{
    fees, NewRecipient, NewTransaction, Recipient, Transaction, TransactionKind,
    TransactionStatus, User, KYC_ENHANCED,
};
use crate::ports::Store;

/// Phone number of the seeded demo user
pub const DEMO_PHONE: &str = "+923001234567";

/// Seed the demo user and their history; returns the user
///
/// Idempotent: if the demo phone number is already registered, the existing
/// user is returned untouched.
pub async fn seed(store: &dyn Store) -> Result<User> {
    if let Some(existing) = store.get_user_by_phone(DEMO_PHONE).await? {
        return Ok(existing);
    }

    let mut user = User::new(DEMO_PHONE);
    user.first_name = Some("Ahmed".to_string());
    user.last_name = Some("Raza".to_string());
    user.cnic_number = Some("42101-1234567-1".to_string());
    user.kyc_level = KYC_ENHANCED;
    user.is_verified = true;
    store.create_user(&user).await?;

    for recipient in demo_recipients(user.id) {
        store.create_recipient(&recipient).await?;
    }
    for tx in demo_transactions(user.id) {
        store.create_transaction(&tx).await?;
    }

    tracing::info!(user_id = %user.id, "seeded demo user");
    Ok(user)
}

fn demo_recipients(user_id: Uuid) -> Vec<Recipient> {
    vec![
        Recipient::from_new(
            user_id,
            NewRecipient {
                name: "Sarah Khan".to_string(),
                country: "GB".to_string(),
                account_details: Some("HSBC ****4821".to_string()),
            },
        ),
        Recipient::from_new(
            user_id,
            NewRecipient {
                name: "Imran Malik".to_string(),
                country: "AE".to_string(),
                account_details: Some("Emirates NBD ****9034".to_string()),
            },
        ),
    ]
}

fn demo_transactions(user_id: Uuid) -> Vec<Transaction> {
    let now = Utc::now();

    let entries = vec![
        (
            1,
            NewTransaction {
                kind: TransactionKind::AddMoney,
                from_currency: None,
                to_currency: Some("PKR".to_string()),
                from_amount: None,
                to_amount: Some(dec!(15000)),
                fee: None,
                recipient_name: None,
                recipient_country: None,
                exchange_rate: None,
            },
        ),
        (
            2,
            NewTransaction {
                kind: TransactionKind::Exchange,
                from_currency: Some("PKR".to_string()),
                to_currency: Some("USDT".to_string()),
                from_amount: Some(dec!(5000)),
                to_amount: Some(dec!(17.5)),
                fee: Some(fees::exchange_fee(dec!(5000)) + fees::NETWORK_FEE_USDT),
                recipient_name: None,
                recipient_country: None,
                exchange_rate: Some(dec!(0.0035)),
            },
        ),
        (
            4,
            NewTransaction {
                kind: TransactionKind::Send,
                from_currency: Some("PKR".to_string()),
                to_currency: Some("GBP".to_string()),
                from_amount: Some(dec!(10000)),
                to_amount: Some(dec!(28)),
                fee: Some(fees::TRANSFER_FEE + fees::exchange_fee(dec!(10000))),
                recipient_name: Some("Sarah Khan".to_string()),
                recipient_country: Some("GB".to_string()),
                exchange_rate: Some(dec!(0.0028)),
            },
        ),
        (
            7,
            NewTransaction {
                kind: TransactionKind::Receive,
                from_currency: Some("AED".to_string()),
                to_currency: Some("PKR".to_string()),
                from_amount: Some(dec!(500)),
                to_amount: Some(dec!(38725)),
                fee: None,
                recipient_name: Some("Imran Malik".to_string()),
                recipient_country: Some("AE".to_string()),
                exchange_rate: Some(dec!(77.45)),
            },
        ),
    ];

    entries
        .into_iter()
        .map(|(days_ago, new)| {
            let mut tx = Transaction::from_new(user_id, new);
            tx.status = TransactionStatus::Completed;
            tx.created_at = now - Duration::days(days_ago);
            tx
        })
        .collect()
}

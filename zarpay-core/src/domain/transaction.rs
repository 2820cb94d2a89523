//! Transaction domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a transaction does with money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Send,
    Receive,
    Exchange,
    AddMoney,
}

/// Lifecycle state of a transaction
///
/// Transactions are created pending and flipped to completed by a fixed
/// timer; nothing checks balance sufficiency. Failed exists for the wire
/// format but nothing in the demo produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// A ledger entry for a send/receive/exchange/top-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub from_amount: Option<Decimal>,
    pub to_amount: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub status: TransactionStatus,
    pub recipient_name: Option<String>,
    pub recipient_country: Option<String>,
    pub exchange_rate: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub from_currency: Option<String>,
    #[serde(default)]
    pub to_currency: Option<String>,
    #[serde(default)]
    pub from_amount: Option<Decimal>,
    #[serde(default)]
    pub to_amount: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub recipient_country: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
}

impl Transaction {
    /// Build a pending transaction for a user from the submitted fields
    pub fn from_new(user_id: Uuid, new: NewTransaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: new.kind,
            from_currency: new.from_currency,
            to_currency: new.to_currency,
            from_amount: new.from_amount,
            to_amount: new.to_amount,
            fee: new.fee,
            status: TransactionStatus::Pending,
            recipient_name: new.recipient_name,
            recipient_country: new.recipient_country,
            exchange_rate: new.exchange_rate,
            created_at: Utc::now(),
        }
    }
}

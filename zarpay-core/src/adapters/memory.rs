//! In-memory store adapter
//!
//! Plain maps behind a single RwLock. This simulates the ledger for the
//! demo: no durability, no per-entity locking, and everything vanishes on
//! restart. Exchange rates are seeded from the fixed table at construction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{
    Balance, ExchangeRate, Recipient, Transaction, TransactionStatus, User,
};
use crate::ports::Store;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    balances: HashMap<Uuid, Balance>,
    transactions: HashMap<Uuid, Transaction>,
    recipients: HashMap<Uuid, Recipient>,
    exchange_rates: HashMap<Uuid, ExchangeRate>,
}

/// Map-backed [`Store`] implementation
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a store seeded with the fixed exchange-rate table
    pub fn new() -> Self {
        let mut tables = Tables::default();
        for rate in ExchangeRate::seed_set() {
            tables.exchange_rates.insert(rate.id, rate);
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Create a store with no seeded rates (for tests)
    pub fn empty() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn get_user_by_phone(&self, phone_number: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.phone_number == phone_number)
            .cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.users.insert(user.id, user.clone());
        for balance in Balance::default_set(user.id) {
            tables.balances.insert(balance.id, balance);
        }
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user_balances(&self, user_id: Uuid) -> Result<Vec<Balance>> {
        let tables = self.tables.read().await;
        Ok(tables
            .balances
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_balance(&self, user_id: Uuid, currency: &str) -> Result<Option<Balance>> {
        let tables = self.tables.read().await;
        Ok(tables
            .balances
            .values()
            .find(|b| b.user_id == user_id && b.currency == currency)
            .cloned())
    }

    async fn update_balance(
        &self,
        user_id: Uuid,
        currency: &str,
        amount: Decimal,
    ) -> Result<Balance> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .balances
            .values_mut()
            .find(|b| b.user_id == user_id && b.currency == currency);

        let balance = match existing {
            Some(balance) => {
                balance.amount = amount;
                balance.updated_at = Utc::now();
                balance.clone()
            }
            None => {
                let balance = Balance::new(user_id, currency, amount);
                tables.balances.insert(balance.id, balance.clone());
                balance
            }
        };
        Ok(balance)
    }

    async fn get_user_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        let tables = self.tables.read().await;
        let mut txs: Vec<Transaction> = tables
            .transactions
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(txs)
    }

    async fn create_transaction(&self, tx: &Transaction) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.transactions.insert(tx.id, tx.clone());
        Ok(())
    }

    async fn update_transaction_status(
        &self,
        id: Uuid,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        let mut tables = self.tables.write().await;
        Ok(tables.transactions.get_mut(&id).map(|tx| {
            tx.status = status;
            tx.clone()
        }))
    }

    async fn get_user_recipients(&self, user_id: Uuid) -> Result<Vec<Recipient>> {
        let tables = self.tables.read().await;
        Ok(tables
            .recipients
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_recipient(&self, recipient: &Recipient) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.recipients.insert(recipient.id, recipient.clone());
        Ok(())
    }

    async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>> {
        let tables = self.tables.read().await;
        Ok(tables
            .exchange_rates
            .values()
            .find(|r| r.from_currency == from && r.to_currency == to)
            .cloned())
    }

    async fn update_exchange_rate(
        &self,
        from: &str,
        to: &str,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .exchange_rates
            .values_mut()
            .find(|r| r.from_currency == from && r.to_currency == to);

        let updated = match existing {
            Some(entry) => {
                entry.rate = rate;
                entry.updated_at = Utc::now();
                entry.clone()
            }
            None => {
                let entry = ExchangeRate::new(from, to, rate);
                tables.exchange_rates.insert(entry.id, entry.clone());
                entry
            }
        };
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_user_seeds_balances() {
        let store = MemoryStore::new();
        let user = User::new("+923001234567");
        store.create_user(&user).await.unwrap();

        let balances = store.get_user_balances(user.id).await.unwrap();
        assert_eq!(balances.len(), 3);

        let pkr = store.get_balance(user.id, "PKR").await.unwrap().unwrap();
        assert_eq!(pkr.amount, dec!(25000));
    }

    #[tokio::test]
    async fn test_lookup_by_phone() {
        let store = MemoryStore::new();
        let user = User::new("+923009998877");
        store.create_user(&user).await.unwrap();

        let found = store
            .get_user_by_phone("+923009998877")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);

        assert!(store
            .get_user_by_phone("+920000000000")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_balance_upserts() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        // No row yet: creates one
        let created = store.update_balance(user_id, "GBP", dec!(12.50)).await.unwrap();
        assert_eq!(created.amount, dec!(12.50));

        // Row exists: overwrites in place, same id
        let updated = store.update_balance(user_id, "GBP", dec!(99)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, dec!(99));
    }

    #[tokio::test]
    async fn test_balances_can_go_negative() {
        let store = MemoryStore::new();
        let user = User::new("+923001112233");
        store.create_user(&user).await.unwrap();

        let balance = store
            .update_balance(user.id, "PKR", dec!(-500))
            .await
            .unwrap();
        assert_eq!(balance.amount, dec!(-500));
    }

    #[tokio::test]
    async fn test_transactions_sorted_newest_first() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        for i in 0..3 {
            let mut tx = Transaction::from_new(
                user_id,
                crate::domain::NewTransaction {
                    kind: crate::domain::TransactionKind::AddMoney,
                    from_currency: None,
                    to_currency: Some("PKR".to_string()),
                    from_amount: None,
                    to_amount: Some(Decimal::from(1000 * (i + 1))),
                    fee: None,
                    recipient_name: None,
                    recipient_country: None,
                    exchange_rate: None,
                },
            );
            tx.created_at = Utc::now() + chrono::Duration::seconds(i);
            store.create_transaction(&tx).await.unwrap();
        }

        let txs = store.get_user_transactions(user_id).await.unwrap();
        assert_eq!(txs.len(), 3);
        assert!(txs[0].created_at >= txs[1].created_at);
        assert!(txs[1].created_at >= txs[2].created_at);
    }

    #[tokio::test]
    async fn test_update_status_of_missing_transaction() {
        let store = MemoryStore::new();
        let result = store
            .update_transaction_status(Uuid::new_v4(), TransactionStatus::Completed)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_rates_seeded_and_upserted() {
        let store = MemoryStore::new();

        let rate = store.get_exchange_rate("PKR", "USDT").await.unwrap().unwrap();
        assert_eq!(rate.rate, dec!(0.0035));

        // Directional: the reverse pair is a different row
        let reverse = store.get_exchange_rate("USDT", "PKR").await.unwrap().unwrap();
        assert_eq!(reverse.rate, dec!(284.10));

        // Upsert overwrites
        store
            .update_exchange_rate("PKR", "USDT", dec!(0.0036))
            .await
            .unwrap();
        let rate = store.get_exchange_rate("PKR", "USDT").await.unwrap().unwrap();
        assert_eq!(rate.rate, dec!(0.0036));

        // Unknown pair is absent, not an error
        assert!(store.get_exchange_rate("PKR", "JPY").await.unwrap().is_none());
    }
}

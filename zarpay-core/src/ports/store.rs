//! Store port - ledger storage abstraction

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Balance, ExchangeRate, Recipient, Transaction, TransactionStatus, User};

/// Ledger storage abstraction
///
/// This trait defines all storage operations. The store does no validation
/// and enforces no cross-entity consistency; callers get exactly what they
/// ask for. Records are never deleted.
#[async_trait]
pub trait Store: Send + Sync {
    // === Users ===

    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Get a user by phone number
    async fn get_user_by_phone(&self, phone_number: &str) -> Result<Option<User>>;

    /// Insert a user and seed their default balances
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Replace a user record
    async fn update_user(&self, user: &User) -> Result<()>;

    // === Balances ===

    /// Get all balances for a user
    async fn get_user_balances(&self, user_id: Uuid) -> Result<Vec<Balance>>;

    /// Get a user's balance in one currency
    async fn get_balance(&self, user_id: Uuid, currency: &str) -> Result<Option<Balance>>;

    /// Set a user's balance in one currency, creating the row if absent
    async fn update_balance(&self, user_id: Uuid, currency: &str, amount: Decimal)
        -> Result<Balance>;

    // === Transactions ===

    /// Get a user's transactions, newest first
    async fn get_user_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    /// Insert a transaction
    async fn create_transaction(&self, tx: &Transaction) -> Result<()>;

    /// Update a transaction's status
    async fn update_transaction_status(
        &self,
        id: Uuid,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>>;

    // === Recipients ===

    /// Get a user's saved recipients
    async fn get_user_recipients(&self, user_id: Uuid) -> Result<Vec<Recipient>>;

    /// Insert a recipient
    async fn create_recipient(&self, recipient: &Recipient) -> Result<()>;

    // === Exchange rates ===

    /// Get the rate for a directional pair
    async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>>;

    /// Set the rate for a directional pair, creating it if absent
    async fn update_exchange_rate(&self, from: &str, to: &str, rate: Decimal)
        -> Result<ExchangeRate>;
}

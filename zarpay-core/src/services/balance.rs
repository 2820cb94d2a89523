//! Balance service - per-currency balance access

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Balance;
use crate::ports::Store;

/// Balance service for the wallet dashboard
pub struct BalanceService {
    store: Arc<dyn Store>,
}

impl BalanceService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All balances for a user (empty for unknown users; this endpoint
    /// never 404s)
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Balance>> {
        self.store.get_user_balances(user_id).await
    }

    /// Set a user's balance in one currency
    ///
    /// No sufficiency or sign checks; the ledger simulation accepts any
    /// amount, including negative ones.
    pub async fn set(&self, user_id: Uuid, currency: &str, amount: Decimal) -> Result<Balance> {
        self.store.update_balance(user_id, currency, amount).await
    }
}

//! Transaction service - history and simulated processing
//!
//! New transactions are stored pending and a spawned timer marks them
//! completed after a fixed delay. There is no balance check, cancellation,
//! or retry; the timer fires exactly once per transaction.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{NewTransaction, Transaction, TransactionStatus};
use crate::ports::Store;

/// Transaction service for the activity feed and money movement
pub struct TransactionService {
    store: Arc<dyn Store>,
    processing_delay: Duration,
}

impl TransactionService {
    pub fn new(store: Arc<dyn Store>, processing_delay: Duration) -> Self {
        Self {
            store,
            processing_delay,
        }
    }

    /// A user's transactions, newest first
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.store.get_user_transactions(user_id).await
    }

    /// Create a pending transaction and schedule its completion
    pub async fn create(&self, user_id: Uuid, new: NewTransaction) -> Result<Transaction> {
        let tx = Transaction::from_new(user_id, new);
        self.store.create_transaction(&tx).await?;
        tracing::info!(tx_id = %tx.id, kind = ?tx.kind, "transaction created");

        let store = Arc::clone(&self.store);
        let delay = self.processing_delay;
        let tx_id = tx.id;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store
                .update_transaction_status(tx_id, TransactionStatus::Completed)
                .await
            {
                Ok(Some(_)) => tracing::info!(%tx_id, "transaction completed"),
                Ok(None) => tracing::warn!(%tx_id, "transaction vanished before completion"),
                Err(e) => tracing::error!(%tx_id, error = %e, "failed to complete transaction"),
            }
        });

        Ok(tx)
    }

    /// Update a transaction's status directly
    pub async fn set_status(
        &self,
        id: Uuid,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        self.store.update_transaction_status(id, status).await
    }
}

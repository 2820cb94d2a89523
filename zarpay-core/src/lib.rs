//! Zarpay Core - Business logic for the mobile wallet backend
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Balance, Transaction, etc.)
//! - **ports**: Trait definitions for external dependencies (Store)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory store, demo seeding)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use adapters::MemoryStore;
use config::Config;
use ports::Store;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    Balance, ExchangeRate, NewRecipient, NewTransaction, NewUser, Recipient, Transaction,
    TransactionKind, TransactionStatus, User, UserUpdate,
};

/// Main context for Zarpay operations
///
/// This is the primary entry point for all business logic. It holds
/// the store, configuration, and all services.
pub struct WalletContext {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub balance_service: BalanceService,
    pub transaction_service: TransactionService,
    pub recipient_service: RecipientService,
    pub rate_service: RateService,
    pub quote_service: QuoteService,
}

impl WalletContext {
    /// Create a new Zarpay context over a fresh in-memory store
    ///
    /// Seeds demo data when `config.demo_mode` is set.
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

        if config.demo_mode {
            adapters::demo::seed(store.as_ref()).await?;
        }

        let auth_service = AuthService::new(Arc::clone(&store));
        let user_service = UserService::new(Arc::clone(&store));
        let balance_service = BalanceService::new(Arc::clone(&store));
        let transaction_service = TransactionService::new(
            Arc::clone(&store),
            Duration::from_millis(config.processing_delay_ms),
        );
        let recipient_service = RecipientService::new(Arc::clone(&store));
        let rate_service = RateService::new(Arc::clone(&store));
        let quote_service = QuoteService::new(Arc::clone(&store));

        Ok(Self {
            config,
            store,
            auth_service,
            user_service,
            balance_service,
            transaction_service,
            recipient_service,
            rate_service,
            quote_service,
        })
    }
}

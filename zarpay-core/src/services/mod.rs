//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and the store port. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod balance;
mod quote;
mod rate;
mod recipient;
mod transaction;
mod user;

pub use auth::{AuthService, OtpSent, Verified, DEMO_TOKEN};
pub use balance::BalanceService;
pub use quote::{ExchangeQuote, QuoteService, TransferQuote};
pub use rate::RateService;
pub use recipient::RecipientService;
pub use transaction::TransactionService;
pub use user::UserService;

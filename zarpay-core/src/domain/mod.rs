//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod balance;
pub mod fees;
mod rate;
mod recipient;
pub mod reference;
pub mod result;
mod transaction;
mod user;

pub use balance::Balance;
pub use rate::ExchangeRate;
pub use recipient::{NewRecipient, Recipient};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionStatus};
pub use user::{NewUser, User, UserUpdate, KYC_BASIC, KYC_ENHANCED, KYC_PREMIUM};

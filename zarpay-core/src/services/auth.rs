//! Auth service - phone signup and OTP verification
//!
//! No SMS is ever sent and no code is ever checked: a code is generated so
//! the flow has something to log, and verification accepts any 6-digit
//! string. This matches the demo's client behavior.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{NewUser, User};
use crate::ports::Store;

/// Token handed out after OTP verification. There is no auth layer; every
/// client gets the same opaque value.
pub const DEMO_TOKEN: &str = "demo-token";

/// Auth service for signup and OTP verification
pub struct AuthService {
    store: Arc<dyn Store>,
}

/// Response to an OTP send request
#[derive(Debug, Clone, Serialize)]
pub struct OtpSent {
    pub success: bool,
    pub message: String,
}

/// Response to a successful OTP verification
#[derive(Debug, Clone, Serialize)]
pub struct Verified {
    pub user: User,
    pub token: String,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Request an OTP for a phone number
    ///
    /// Generates a 6-digit code and logs it instead of sending an SMS.
    pub async fn send_otp(&self, phone_number: &str) -> Result<OtpSent> {
        if phone_number.trim().is_empty() {
            return Err(Error::validation("Phone number is required"));
        }

        let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        tracing::info!(phone = phone_number, code, "OTP generated (not sent)");

        Ok(OtpSent {
            success: true,
            message: "OTP sent successfully".to_string(),
        })
    }

    /// Verify an OTP and sign the user in, registering them if new
    ///
    /// Any string of exactly 6 ASCII digits passes. New users are created
    /// with default balances by the store.
    pub async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<Verified> {
        if phone_number.trim().is_empty() || otp.is_empty() {
            return Err(Error::validation("Phone number and OTP are required"));
        }
        if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::validation("Invalid OTP"));
        }

        let user = match self.store.get_user_by_phone(phone_number).await? {
            Some(user) => user,
            None => {
                let user: User = NewUser::from_phone(phone_number).into();
                self.store.create_user(&user).await?;
                tracing::info!(user_id = %user.id, "registered new user");
                user
            }
        };

        Ok(Verified {
            user,
            token: DEMO_TOKEN.to_string(),
        })
    }
}

//! User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// KYC verification tier
///
/// Levels map to the mobile app's tiers: 0 basic (phone only),
/// 1 enhanced (CNIC on file), 2 premium (biometric done).
pub const KYC_BASIC: i32 = 0;
pub const KYC_ENHANCED: i32 = 1;
pub const KYC_PREMIUM: i32 = 2;

/// A wallet user, identified by phone number
///
/// Note: verification is a demo flag. There is no real KYC pipeline behind
/// `kyc_level` or `is_verified`; both are set by the client flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub phone_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub cnic_number: Option<String>,
    pub kyc_level: i32,
    pub is_verified: bool,
    pub preferred_language: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified user with the default language
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            first_name: None,
            last_name: None,
            cnic_number: None,
            kyc_level: KYC_BASIC,
            is_verified: false,
            preferred_language: "en".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Fields accepted when registering a user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub phone_number: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub cnic_number: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}

impl NewUser {
    pub fn from_phone(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Default::default()
        }
    }
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        let mut user = User::new(new.phone_number);
        user.first_name = new.first_name;
        user.last_name = new.last_name;
        user.cnic_number = new.cnic_number;
        if let Some(lang) = new.preferred_language {
            user.preferred_language = lang;
        }
        user
    }
}

/// Partial update applied via PATCH
///
/// `kyc_level` and `is_verified` are patchable because the KYC steps are
/// simulated client-side and need somewhere to land.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub cnic_number: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub kyc_level: Option<i32>,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

impl User {
    /// Apply a partial update in place
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(v) = update.first_name {
            self.first_name = Some(v);
        }
        if let Some(v) = update.last_name {
            self.last_name = Some(v);
        }
        if let Some(v) = update.cnic_number {
            self.cnic_number = Some(v);
        }
        if let Some(v) = update.preferred_language {
            self.preferred_language = v;
        }
        if let Some(v) = update.kyc_level {
            self.kyc_level = v;
        }
        if let Some(v) = update.is_verified {
            self.is_verified = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("+923001234567");
        assert_eq!(user.phone_number, "+923001234567");
        assert_eq!(user.kyc_level, KYC_BASIC);
        assert!(!user.is_verified);
        assert_eq!(user.preferred_language, "en");
    }

    #[test]
    fn test_apply_partial_update() {
        let mut user = User::new("+923001234567");
        user.apply(UserUpdate {
            first_name: Some("Ayesha".to_string()),
            kyc_level: Some(KYC_ENHANCED),
            ..Default::default()
        });

        assert_eq!(user.first_name.as_deref(), Some("Ayesha"));
        assert_eq!(user.kyc_level, KYC_ENHANCED);
        // Untouched fields stay as they were
        assert!(user.last_name.is_none());
        assert!(!user.is_verified);
    }

    #[test]
    fn test_new_user_carries_profile() {
        let user: User = NewUser {
            phone_number: "+923005554433".to_string(),
            first_name: Some("Bilal".to_string()),
            preferred_language: Some("ur".to_string()),
            ..Default::default()
        }
        .into();

        assert_eq!(user.first_name.as_deref(), Some("Bilal"));
        assert_eq!(user.preferred_language, "ur");
    }
}

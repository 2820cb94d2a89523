//! Recipient domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved cross-border transfer recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// ISO 3166 country code ("US", "GB", ...)
    pub country: String,
    pub account_details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when saving a recipient
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipient {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub account_details: Option<String>,
}

impl Recipient {
    /// Build a recipient for a user from the submitted fields
    pub fn from_new(user_id: Uuid, new: NewRecipient) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: new.name,
            country: new.country,
            account_details: new.account_details,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new() {
        let user_id = Uuid::new_v4();
        let recipient = Recipient::from_new(
            user_id,
            NewRecipient {
                name: "Sarah Khan".to_string(),
                country: "GB".to_string(),
                account_details: Some("HSBC ****4821".to_string()),
            },
        );

        assert_eq!(recipient.user_id, user_id);
        assert_eq!(recipient.country, "GB");
        assert_eq!(recipient.account_details.as_deref(), Some("HSBC ****4821"));
    }
}

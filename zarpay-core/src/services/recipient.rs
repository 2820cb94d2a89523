//! Recipient service - saved transfer recipients

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{NewRecipient, Recipient};
use crate::ports::Store;

/// Recipient service for the send-money flow
pub struct RecipientService {
    store: Arc<dyn Store>,
}

impl RecipientService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// A user's saved recipients
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Recipient>> {
        self.store.get_user_recipients(user_id).await
    }

    /// Save a recipient for a user
    pub async fn create(&self, user_id: Uuid, new: NewRecipient) -> Result<Recipient> {
        if new.name.trim().is_empty() {
            return Err(Error::validation("Recipient name is required"));
        }
        if new.country.trim().is_empty() {
            return Err(Error::validation("Recipient country is required"));
        }

        let recipient = Recipient::from_new(user_id, new);
        self.store.create_recipient(&recipient).await?;
        Ok(recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[tokio::test]
    async fn test_create_and_list() {
        let service = RecipientService::new(Arc::new(MemoryStore::new()));
        let user_id = Uuid::new_v4();

        service
            .create(
                user_id,
                NewRecipient {
                    name: "Sarah Khan".to_string(),
                    country: "GB".to_string(),
                    account_details: None,
                },
            )
            .await
            .unwrap();

        let recipients = service.list(user_id).await.unwrap();
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].name, "Sarah Khan");
    }

    #[tokio::test]
    async fn test_create_requires_name_and_country() {
        let service = RecipientService::new(Arc::new(MemoryStore::new()));
        let user_id = Uuid::new_v4();

        let missing_name = NewRecipient {
            name: " ".to_string(),
            country: "GB".to_string(),
            account_details: None,
        };
        assert!(matches!(
            service.create(user_id, missing_name).await,
            Err(Error::Validation(_))
        ));

        let missing_country = NewRecipient {
            name: "Ali".to_string(),
            country: "".to_string(),
            account_details: None,
        };
        assert!(matches!(
            service.create(user_id, missing_country).await,
            Err(Error::Validation(_))
        ));
    }
}

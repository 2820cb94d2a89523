//! User service - profile lookup and partial updates

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{User, UserUpdate};
use crate::ports::Store;

/// User service for profile management
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Get a user by ID
    pub async fn get(&self, id: Uuid) -> Result<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {id}")))
    }

    /// Apply a partial profile update
    pub async fn update(&self, id: Uuid, update: UserUpdate) -> Result<User> {
        let mut user = self.get(id).await?;
        user.apply(update);
        self.store.update_user(&user).await?;
        Ok(user)
    }
}

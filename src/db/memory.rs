use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::models::Credential;
use crate::db::store::{StoreError, UserStore};

/// Map-backed store enforcing the same unique-email contract as Postgres.
/// Used by integration tests and local runs without a database.
#[derive(Default)]
pub struct InMemoryUserStore {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Credential, StoreError> {
        let mut credentials = self.credentials.write().await;
        if credentials.contains_key(email) {
            return Err(StoreError::UniqueViolation {
                field: "email".to_string(),
            });
        }

        let credential = Credential::new(email.to_string(), password_hash.to_string());
        credentials.insert(email.to_string(), credential.clone());
        Ok(credential)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self.credentials.read().await.get(email).cloned())
    }
}

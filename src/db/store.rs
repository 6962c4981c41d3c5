use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::db::models::Credential;

/// Store-level failures. `UniqueViolation` is the one expected, recoverable
/// outcome; everything else is infrastructure and propagates unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violation on {field}")]
    UniqueViolation { field: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Contract for credential persistence.
///
/// The store, not its callers, is the arbiter of the unique-email invariant:
/// under concurrent creates for the same email exactly one succeeds and the
/// rest report `UniqueViolation`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Credential, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError>;
}

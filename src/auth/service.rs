use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::password;
use crate::auth::token::{IssuedToken, TokenIssuer};
use crate::db::store::{StoreError, UserStore};
use crate::error::{AppError, AuthError};

/// Caller-supplied credentials. The plaintext password stays in request
/// memory only; it is never persisted or logged.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Orchestrates registration and login against the user store and hands
/// verified identities to the token issuer. Stateless between calls.
pub struct CredentialManager {
    store: Arc<dyn UserStore>,
    issuer: TokenIssuer,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn UserStore>, issuer: TokenIssuer) -> Self {
        Self { store, issuer }
    }

    /// Create a credential for a new email and issue a token for it.
    ///
    /// Email uniqueness is enforced by the store: under concurrent
    /// registrations of the same email exactly one create succeeds and the
    /// rest surface as `DuplicateEmail`. Other store failures propagate
    /// unchanged; no retries.
    pub async fn register(&self, request: &AuthRequest) -> Result<IssuedToken, AppError> {
        let hash = password::hash_password(&request.password)?;

        match self.store.create(&request.email, &hash).await {
            Ok(credential) => {
                info!("Registered new credential for email: {}", credential.email);
                self.issuer.issue(credential.id, &credential.email)
            }
            Err(StoreError::UniqueViolation { .. }) => {
                warn!("Registration rejected, email already in use: {}", request.email);
                Err(AuthError::DuplicateEmail.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Verify a password against the stored hash and issue a token.
    pub async fn login(&self, request: &AuthRequest) -> Result<IssuedToken, AppError> {
        let credential = self
            .store
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !password::verify_password(&credential.password_hash, &request.password) {
            warn!("Password verification failed for email: {}", request.email);
            return Err(AuthError::InvalidPassword.into());
        }

        self.issuer.issue(credential.id, &credential.email)
    }
}

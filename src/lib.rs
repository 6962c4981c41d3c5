pub mod auth;
pub mod config;
pub mod db;
pub mod error;

use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpResponse;
use sqlx::postgres::PgPoolOptions;

pub use config::Settings;
pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;

pub use auth::{AuthRequest, Claims, CredentialManager, IssuedToken, TokenIssuer};
pub use db::{Credential, InMemoryUserStore, PgUserStore, UserStore};

use db::store::StoreError;

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub credentials: Arc<CredentialManager>,
}

impl AppState {
    /// Connect to Postgres, apply migrations, and wire the credential
    /// manager over the resulting store.
    pub async fn new(config: Settings) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let store = PgUserStore::new(Arc::new(pool));
        Self::with_store(config, Arc::new(store))
    }

    /// Build state over any user store implementation.
    pub fn with_store(config: Settings, store: Arc<dyn UserStore>) -> Result<Self> {
        let issuer = TokenIssuer::new(
            config.auth.jwt_secret.clone(),
            config.auth.token_ttl_minutes,
        )?;
        let credentials = Arc::new(CredentialManager::new(store, issuer));

        Ok(Self {
            config: Arc::new(config),
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_with_memory_store() {
        let config = Settings::new_for_test().expect("Failed to load test config");
        let state = AppState::with_store(config, Arc::new(InMemoryUserStore::new()))
            .expect("Failed to build state");

        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(Arc::ptr_eq(&state.credentials, &cloned.credentials));
    }

    #[test]
    fn test_app_state_rejects_empty_secret() {
        let mut config = Settings::new_for_test().expect("Failed to load test config");
        config.auth.jwt_secret = String::new();

        let state = AppState::with_store(config, Arc::new(InMemoryUserStore::new()));
        assert!(matches!(state, Err(AppError::ConfigError(_))));
    }
}

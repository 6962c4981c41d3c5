use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::models::Credential;
use crate::db::store::{StoreError, UserStore};

/// Postgres-backed user store. Schema lives in `migrations/`; the unique
/// index on `email` is what turns concurrent duplicate registrations into
/// `UniqueViolation` for all but one caller.
pub struct PgUserStore {
    pool: Arc<PgPool>,
}

impl PgUserStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_query_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        // SQLSTATE 23505: unique_violation. Email is the only unique
        // constraint on the credentials table.
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::UniqueViolation {
                field: "email".to_string(),
            };
        }
    }
    StoreError::Query(err.to_string())
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Credential, StoreError> {
        let credential = Credential::new(email.to_string(), password_hash.to_string());

        sqlx::query_as::<_, Credential>(
            r#"
            INSERT INTO credentials (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(credential.id)
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_query_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        sqlx::query_as::<_, Credential>(
            "SELECT id, email, password_hash, created_at FROM credentials WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_map_to_query() {
        let err = map_query_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Query(_)));
    }
}

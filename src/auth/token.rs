use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Credential ID
    pub email: String,
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

/// A freshly signed access token. Never persisted; its lifetime is bounded
/// by the embedded expiry claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
}

/// Produces signed tokens asserting identity, with a fixed validity window.
#[derive(Debug)]
pub struct TokenIssuer {
    secret: String,
    ttl_minutes: i64,
}

impl TokenIssuer {
    /// An empty secret would sign tokens nobody can trust, so it is rejected
    /// here rather than at the first issuance.
    pub fn new(secret: String, ttl_minutes: i64) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::ConfigError(
                "token signing secret is not set".to_string(),
            ));
        }

        Ok(Self {
            secret,
            ttl_minutes,
        })
    }

    pub fn issue(&self, subject: Uuid, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            exp: (now + Duration::minutes(self.ttl_minutes)).timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(IssuedToken { access_token })
    }

    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(data.claims)
    }
}

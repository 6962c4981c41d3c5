use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::db::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    AuthError(#[from] AuthError),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Signing error: {0}")]
    SigningError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Implement conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// Implement conversion from jsonwebtoken errors
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::SigningError(err.to_string())
    }
}

// Add conversion from std::io::Error
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

// Implement actix_web::ResponseError for AppError
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Expected auth failures and validation errors carry a stable
        // client-facing message; infrastructure failures stay opaque.
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let response = json!({
            "error": {
                "status": status.as_u16(),
                "message": message
            }
        });
        HttpResponse::build(status).json(response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Expected, client-facing authentication outcomes. The messages are part of
/// the wire contract and must not change.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email address already in use")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Passwords must match!")]
    InvalidPassword,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_conversion() {
        // Test IO error conversion
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::InternalError(_)));

        // Test config error conversion
        let config_err = config::ConfigError::NotFound(String::from("key not found"));
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::ConfigError(_)));

        // Test store error conversion
        let store_err = StoreError::Query("connection reset".to_string());
        let app_err: AppError = store_err.into();
        assert!(matches!(app_err, AppError::StoreError(_)));
    }

    #[test]
    fn test_error_status_codes() {
        // All three expected auth failures map to 403
        let err = AppError::AuthError(AuthError::DuplicateEmail);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = AppError::AuthError(AuthError::UserNotFound);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = AppError::AuthError(AuthError::InvalidPassword);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        // Test validation error status code
        let err = AppError::ValidationError("invalid input".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        // Infrastructure failures stay 5xx
        let err = AppError::StoreError(StoreError::Query("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::ConfigError("missing secret".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_facing_messages_are_literal() {
        assert_eq!(
            AppError::AuthError(AuthError::DuplicateEmail).to_string(),
            "Email address already in use"
        );
        assert_eq!(
            AppError::AuthError(AuthError::UserNotFound).to_string(),
            "User not found"
        );
        assert_eq!(
            AppError::AuthError(AuthError::InvalidPassword).to_string(),
            "Passwords must match!"
        );
    }
}

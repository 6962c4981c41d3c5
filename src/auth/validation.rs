use crate::auth::service::AuthRequest;
use crate::error::AppError;

/// Validate an auth request at the HTTP boundary, before the credential
/// manager is invoked. The core itself does not re-validate format.
pub fn validate_auth_request(request: &AuthRequest) -> Result<(), AppError> {
    if request.email.is_empty() || !request.email.contains('@') {
        return Err(AppError::ValidationError(
            "email must be a valid address".to_string(),
        ));
    }

    if request.password.is_empty() {
        return Err(AppError::ValidationError(
            "password must not be empty".to_string(),
        ));
    }

    Ok(())
}

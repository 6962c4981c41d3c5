use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password with Argon2id and a fresh random salt.
///
/// Cost parameters are the argon2 crate defaults. They are a deliberate
/// security/performance tradeoff; anyone replacing them must set memory,
/// iteration, and parallelism costs explicitly.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// A malformed stored hash counts as a verification failure rather than an
/// error. The comparison itself is constant-time inside the argon2 crate.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(&hash, "secret1"));
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password(&hash, "secret2"));
    }

    #[test]
    fn test_hash_uniqueness() {
        let hash1 = hash_password("secret1").unwrap();
        let hash2 = hash_password("secret1").unwrap();

        // Same password, different salts
        assert_ne!(hash1, hash2);
        assert!(verify_password(&hash1, "secret1"));
        assert!(verify_password(&hash2, "secret1"));
    }

    #[test]
    fn test_malformed_hash_is_a_verification_failure() {
        assert!(!verify_password("not-a-phc-string", "secret1"));
        assert!(!verify_password("", "secret1"));
    }
}

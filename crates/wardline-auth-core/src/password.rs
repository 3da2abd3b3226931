//! Password hashing
//!
//! Argon2id with a fresh random salt per hash. The stored form is a PHC
//! string carrying the salt and parameters, so verification needs no
//! side-channel state and two users with the same password never share a
//! hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::AuthError;

/// Hash a password for storage.
///
/// The output is a PHC-format string (`$argon2id$...`) embedding the
/// per-record salt and cost parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AuthError::Internal("failed to hash password".to_string())
        })
}

/// Verify a password against a stored PHC string.
///
/// Comparison of the recomputed digest happens in constant time inside
/// the argon2 crate. Returns `Ok(false)` on mismatch; an unparseable
/// stored hash is an internal error, not a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!("Stored password hash is malformed: {}", e);
        AuthError::Internal("stored password hash is malformed".to_string())
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(verify_password("Secret123!", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        // Salt uniqueness: identical passwords must not share a digest
        let a = hash_password("Secret123!").unwrap();
        let b = hash_password("Secret123!").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("Secret123!", &a).unwrap());
        assert!(verify_password("Secret123!", &b).unwrap());
    }

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_password("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_stored_hash_is_internal_error() {
        let result = verify_password("pw", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}

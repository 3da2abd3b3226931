//! Error contract tests
//!
//! The REST surface promises specific status codes per failure class;
//! these tests pin the auth taxonomy the handlers map into responses.

use wardline_auth_core::AuthError;

#[test]
fn test_validation_maps_to_422() {
    let err = AuthError::Validation("username is required".to_string());
    assert_eq!(err.status_code(), 422);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_conflict_maps_to_409() {
    let err = AuthError::Conflict("username or email already exists".to_string());
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "CONFLICT");
}

#[test]
fn test_credential_and_token_failures_are_401() {
    assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
    assert_eq!(AuthError::InvalidToken.status_code(), 401);
    assert_eq!(AuthError::TokenExpired.status_code(), 401);
}

#[test]
fn test_expired_token_has_distinct_code() {
    // Same status as other token failures, but callers can tell they need
    // to re-authenticate rather than fix the token
    assert_eq!(AuthError::TokenExpired.error_code(), "TOKEN_EXPIRED");
    assert_ne!(
        AuthError::TokenExpired.error_code(),
        AuthError::InvalidToken.error_code()
    );
}

#[test]
fn test_forbidden_maps_to_403() {
    assert_eq!(AuthError::Forbidden.status_code(), 403);
    assert_eq!(AuthError::Forbidden.error_code(), "FORBIDDEN");
}

#[test]
fn test_storage_failures_are_500() {
    let err = AuthError::Database("connection reset".to_string());
    assert_eq!(err.status_code(), 500);
}

#[test]
fn test_credential_failure_message_reveals_nothing() {
    // The display string must not say whether the username existed
    let msg = AuthError::InvalidCredentials.to_string();
    assert!(!msg.contains("username"));
    assert!(!msg.contains("password"));
    assert!(!msg.contains("not found"));
}

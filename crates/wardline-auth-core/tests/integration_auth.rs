//! Integration tests for the register / login / authenticate flow
//!
//! Run against the in-memory mock repository, which enforces the same
//! uniqueness rules as the production store's indexes.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::MockUserRepository;
use wardline_auth_core::{AuthConfig, AuthError, AuthService, Registration};
use wardline_types::Role;

fn service(repo: Arc<MockUserRepository>) -> AuthService<MockUserRepository> {
    let config = AuthConfig::try_new("integration-test-secret-0123456789ab").unwrap();
    AuthService::new(config, repo)
}

fn registration(username: &str, email: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: "Secret123!".to_string(),
        full_name: "Test User".to_string(),
        role: "nurse".to_string(),
    }
}

#[tokio::test]
async fn test_register_then_login_preserves_role() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));

    let session = auth
        .register(registration("alice", "alice@x.com"))
        .await
        .unwrap();
    assert_eq!(session.user.role, Role::Nurse);

    let login = auth.login("alice", "Secret123!").await.unwrap();
    assert_eq!(login.user.username, "alice");

    // Role embedded in the token matches the registered role
    let identity = auth.authenticate(&login.token).unwrap();
    assert_eq!(identity.role, Role::Nurse);
    assert_eq!(identity.user_id, session.user.id);
}

#[tokio::test]
async fn test_duplicate_username_conflicts_without_second_row() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));

    auth.register(registration("alice", "alice@x.com"))
        .await
        .unwrap();
    let first_hash = repo.stored_hash("alice").unwrap();

    // Same username, different email
    let result = auth.register(registration("alice", "other@x.com")).await;
    assert!(matches!(result, Err(AuthError::Conflict(_))));

    // The second attempt created no row and left the first untouched
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.stored_hash("alice").unwrap(), first_hash);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(repo);

    auth.register(registration("alice", "alice@x.com"))
        .await
        .unwrap();

    let result = auth.register(registration("bob", "alice@x.com")).await;
    assert!(matches!(result, Err(AuthError::Conflict(_))));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(repo);

    auth.register(registration("alice", "alice@x.com"))
        .await
        .unwrap();

    // Wrong password for an existing user
    let wrong_password = auth.login("alice", "not-the-password").await.unwrap_err();
    // Nonexistent username
    let no_such_user = auth.login("mallory", "Secret123!").await.unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(no_such_user, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.error_code(), no_such_user.error_code());
    assert_eq!(wrong_password.status_code(), no_such_user.status_code());
}

#[tokio::test]
async fn test_deactivated_user_cannot_login() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));

    let session = auth
        .register(registration("alice", "alice@x.com"))
        .await
        .unwrap();

    use wardline_db::UserRepository;
    repo.set_active(session.user.id.0, false).await.unwrap();

    let result = auth.login("alice", "Secret123!").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_same_password_different_stored_hashes() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(Arc::clone(&repo));

    auth.register(registration("alice", "alice@x.com"))
        .await
        .unwrap();
    auth.register(registration("bob", "bob@x.com"))
        .await
        .unwrap();

    let alice_hash = repo.stored_hash("alice").unwrap();
    let bob_hash = repo.stored_hash("bob").unwrap();
    assert_ne!(alice_hash, bob_hash);
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(repo);

    let session = auth
        .register(registration("alice", "alice@x.com"))
        .await
        .unwrap();

    let mut tampered = session.token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'x' { 'y' } else { 'x' });

    let result = auth.authenticate(&tampered);
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn test_token_expires_after_lifetime() {
    let repo = Arc::new(MockUserRepository::new());
    let config = AuthConfig::try_new("integration-test-secret-0123456789ab")
        .unwrap()
        .with_token_lifetime(Duration::from_secs(1));
    let auth = AuthService::new(config, repo);

    let session = auth
        .register(registration("alice", "alice@x.com"))
        .await
        .unwrap();

    // Accepted inside the lifetime
    assert!(auth.authenticate(&session.token).is_ok());

    // Rejected once the lifetime has elapsed
    tokio::time::sleep(Duration::from_millis(2100)).await;
    let result = auth.authenticate(&session.token);
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[tokio::test]
async fn test_register_conflict_then_login_scenario() {
    // The concrete walk-through: register alice as nurse, re-register the
    // same username with a different email, then log in and inspect the
    // decoded role.
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(repo);

    let reg = Registration {
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password: "Secret123!".to_string(),
        full_name: "Alice Imara".to_string(),
        role: "nurse".to_string(),
    };
    let session = auth.register(reg.clone()).await.unwrap();
    assert!(!session.token.is_empty());

    let mut second = reg;
    second.email = "alice2@x.com".to_string();
    let conflict = auth.register(second).await.unwrap_err();
    assert_eq!(conflict.status_code(), 409);

    let login = auth.login("alice", "Secret123!").await.unwrap();
    let identity = auth.authenticate(&login.token).unwrap();
    assert_eq!(identity.role, Role::Nurse);
}

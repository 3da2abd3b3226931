//! Auth service - ties together credential checks, token issuance, and
//! role-based authorization

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use wardline_db::{CreateUser, UserRepository, UserRow};
use wardline_types::{Role, UserId};

use crate::token::TokenIssuer;
use crate::{hash_password, verify_password, AuthConfig, AuthError};

/// Registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// Public projection of a user record.
///
/// This is the only user shape that leaves the service; the password hash
/// stays inside the credential store.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build the projection from a database row
    pub fn from_row(row: &UserRow) -> Result<Self, AuthError> {
        let role: Role = row.role.parse().map_err(|_| {
            tracing::error!(user_id = %row.id, role = %row.role, "Stored role is not in the enumeration");
            AuthError::Internal("stored role is invalid".to_string())
        })?;

        Ok(Self {
            id: row.user_id(),
            username: row.username.clone(),
            email: row.email.clone(),
            full_name: row.full_name.clone(),
            role,
            active: row.active,
            created_at: row.created_at,
        })
    }
}

/// Identity resolved from a validated token, for downstream authorization
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Admit this identity if its role is in the required set.
    ///
    /// An empty required set means any authenticated user. The role comes
    /// from the token, not a fresh store read, so a role change only takes
    /// effect at the next login — the cost of skipping a database round
    /// trip on every request.
    pub fn require_any(&self, required: &[Role]) -> Result<(), AuthError> {
        if required.is_empty() || required.contains(&self.role) {
            Ok(())
        } else {
            tracing::debug!(
                user_id = %self.user_id,
                role = %self.role,
                "Role not in required set"
            );
            Err(AuthError::Forbidden)
        }
    }
}

/// A freshly issued token plus the owning user's projection
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Authentication service
///
/// Gatekeeper for every protected operation: verifies credentials against
/// the user store, issues signed time-limited tokens, and checks role
/// membership. Generic over the repository so tests can run against an
/// in-memory store.
pub struct AuthService<U: UserRepository> {
    token_issuer: TokenIssuer,
    user_repo: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, user_repo: Arc<U>) -> Self {
        Self {
            token_issuer: TokenIssuer::new(&config),
            user_repo,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new user and issue their first token.
    ///
    /// Uniqueness of username and email is enforced by the store's unique
    /// indexes; a violation at insert time surfaces as `Conflict`. There
    /// is deliberately no pre-check, so concurrent registrations cannot
    /// race past the constraint.
    pub async fn register(&self, reg: Registration) -> Result<AuthSession, AuthError> {
        let role = validate_registration(&reg)?;

        let password_hash = hash_password(&reg.password)?;

        let row = self
            .user_repo
            .create(CreateUser {
                id: UserId::new().0,
                username: reg.username.trim().to_string(),
                email: reg.email.trim().to_string(),
                password_hash,
                role: role.to_string(),
                full_name: reg.full_name.trim().to_string(),
            })
            .await?;

        let user = UserProfile::from_row(&row)?;
        let token = self.token_issuer.issue(user.id, &user.username, user.role)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession { token, user })
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Verify credentials and issue a fresh token.
    ///
    /// Unknown username, deactivated account, and wrong password all
    /// surface as the same `InvalidCredentials` so the response never
    /// reveals which check failed.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AuthError> {
        let row = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !row.active {
            return Err(AuthError::InvalidCredentials);
        }

        if !verify_password(password, &row.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let user = UserProfile::from_row(&row)?;
        let token = self.token_issuer.issue(user.id, &user.username, user.role)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }

    // =========================================================================
    // Token validation
    // =========================================================================

    /// Validate a bearer token and resolve the embedded identity.
    ///
    /// Purely signature + expiry based; no database round trip. The role
    /// is the one captured at issuance — stale until the next login, in
    /// exchange for a per-request lookup saved.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.token_issuer.validate(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id()?,
            username: claims.username,
            role: claims.role,
        })
    }

    /// Look up the current user's projection by id
    pub async fn profile(&self, user_id: UserId) -> Result<UserProfile, AuthError> {
        let row = self
            .user_repo
            .find_by_id(user_id.0)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        UserProfile::from_row(&row)
    }
}

impl<U: UserRepository> std::fmt::Debug for AuthService<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("token_issuer", &self.token_issuer)
            .finish_non_exhaustive()
    }
}

/// Check required fields and parse the role.
///
/// The only password rule is non-empty; there is no complexity policy.
fn validate_registration(reg: &Registration) -> Result<Role, AuthError> {
    if reg.username.trim().is_empty() {
        return Err(AuthError::Validation("username is required".to_string()));
    }
    if reg.email.trim().is_empty() {
        return Err(AuthError::Validation("email is required".to_string()));
    }
    if reg.password.is_empty() {
        return Err(AuthError::Validation("password is required".to_string()));
    }
    if reg.full_name.trim().is_empty() {
        return Err(AuthError::Validation("full_name is required".to_string()));
    }

    reg.role
        .parse()
        .map_err(|_| AuthError::Validation(format!("invalid role: {}", reg.role)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "Secret123!".to_string(),
            full_name: "Alice Imara".to_string(),
            role: "nurse".to_string(),
        }
    }

    #[test]
    fn test_validate_registration_accepts_valid() {
        assert_eq!(validate_registration(&registration()).unwrap(), Role::Nurse);
    }

    #[test]
    fn test_validate_registration_rejects_missing_fields() {
        for field in ["username", "email", "password", "full_name"] {
            let mut reg = registration();
            match field {
                "username" => reg.username = "  ".to_string(),
                "email" => reg.email = String::new(),
                "password" => reg.password = String::new(),
                _ => reg.full_name = String::new(),
            }
            let err = validate_registration(&reg).unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "field: {field}");
        }
    }

    #[test]
    fn test_validate_registration_rejects_unknown_role() {
        let mut reg = registration();
        reg.role = "janitor".to_string();
        assert!(matches!(
            validate_registration(&reg),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_require_any_empty_set_admits_any_role() {
        let user = AuthenticatedUser {
            user_id: UserId::new(),
            username: "bob".to_string(),
            role: Role::Staff,
        };
        assert!(user.require_any(&[]).is_ok());
    }

    #[test]
    fn test_require_any_checks_membership() {
        let user = AuthenticatedUser {
            user_id: UserId::new(),
            username: "bob".to_string(),
            role: Role::Nurse,
        };
        assert!(user.require_any(&[Role::Nurse, Role::Doctor]).is_ok());
        assert!(matches!(
            user.require_any(&[Role::Admin]),
            Err(AuthError::Forbidden)
        ));
    }
}

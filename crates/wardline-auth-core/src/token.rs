//! Access token issuance and validation
//!
//! Tokens are compact HS256 JWTs carrying subject id, username, role, and
//! the issue/expiry timestamps. They are self-contained: validation needs
//! only the signing secret, so concurrent requests share no mutable state.
//!
//! There is no server-side revocation list. A token stays valid until its
//! expiry even if the user's role changes or the account is deactivated;
//! role changes take effect at the next login. Logout is client-side
//! discard of the token.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use wardline_types::{Role, UserId};

use crate::{AuthConfig, AuthError};

/// Claims embedded in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: String,
    /// Username at issuance time
    pub username: String,
    /// Role at issuance time
    pub role: Role,
    /// Issued at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Get the subject as a typed user id
    pub fn user_id(&self) -> Result<UserId, AuthError> {
        UserId::parse(&self.sub).map_err(|_| AuthError::InvalidToken)
    }
}

/// Signs and validates access tokens.
///
/// The keys are derived once from the configured secret at construction;
/// the issuer is cheap to clone and safe to share across requests.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_secs: i64,
}

impl TokenIssuer {
    /// Create a new token issuer from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            lifetime_secs: config.token_lifetime.as_secs() as i64,
        }
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user_id: UserId, username: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            iat: now,
            exp: now + self.lifetime_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Token encoding failed: {}", e);
            AuthError::Internal("failed to issue token".to_string())
        })
    }

    /// Validate a token and return its claims.
    ///
    /// A bad signature or malformed token maps to `InvalidToken`; an
    /// elapsed lifetime maps to `TokenExpired`.
    pub fn validate(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn issuer_with_lifetime(lifetime: Duration) -> TokenIssuer {
        let config = AuthConfig::try_new("a".repeat(32))
            .unwrap()
            .with_token_lifetime(lifetime);
        TokenIssuer::new(&config)
    }

    #[test]
    fn test_issue_validate_round_trip() {
        let issuer = issuer_with_lifetime(Duration::from_secs(3600));
        let user_id = UserId::new();

        let token = issuer.issue(user_id, "alice", Role::Nurse).unwrap();
        let claims = issuer.validate(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Nurse);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer_with_lifetime(Duration::from_secs(0));
        let token = issuer.issue(UserId::new(), "alice", Role::Staff).unwrap();

        // exp == iat, so the token is already past its lifetime
        std::thread::sleep(Duration::from_millis(1100));
        let result = issuer.validate(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let issuer = issuer_with_lifetime(Duration::from_secs(3600));
        let token = issuer.issue(UserId::new(), "alice", Role::Nurse).unwrap();

        // Flip one character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        let result = issuer.validate(&tampered);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = issuer_with_lifetime(Duration::from_secs(3600));
        let config = AuthConfig::try_new("b".repeat(32)).unwrap();
        let validator = TokenIssuer::new(&config);

        let token = signer.issue(UserId::new(), "alice", Role::Nurse).unwrap();
        let result = validator.validate(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let issuer = issuer_with_lifetime(Duration::from_secs(3600));

        for garbage in ["", "nodots", "two.dots", "a.b.c.d"] {
            let result = issuer.validate(garbage);
            assert!(
                matches!(result, Err(AuthError::InvalidToken)),
                "expected InvalidToken for {garbage:?}"
            );
        }
    }
}

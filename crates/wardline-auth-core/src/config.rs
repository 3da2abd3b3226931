//! Configuration types for the auth service

use std::time::Duration;

use crate::AuthError;

/// Auth service configuration
///
/// Loaded once at startup and injected into [`crate::AuthService`]; the
/// signing secret is never mutated at runtime and never derived from
/// request input.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub token_secret: String,
    /// Access token lifetime
    pub token_lifetime: Duration,
}

impl AuthConfig {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Default token lifetime
    pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

    /// Create a new auth config, validating the secret length.
    ///
    /// # Errors
    /// Returns [`AuthError::Configuration`] if the secret is shorter than
    /// [`Self::MIN_SECRET_LENGTH`] bytes.
    pub fn try_new(token_secret: impl Into<String>) -> Result<Self, AuthError> {
        let token_secret = token_secret.into();
        if token_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "token secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                token_secret.len()
            )));
        }
        Ok(Self {
            token_secret,
            token_lifetime: Self::DEFAULT_TOKEN_LIFETIME,
        })
    }

    /// Set the token lifetime
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        let result = AuthConfig::try_new("short");
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_valid_secret_accepted() {
        let config = AuthConfig::try_new("a".repeat(32)).unwrap();
        assert_eq!(config.token_lifetime, AuthConfig::DEFAULT_TOKEN_LIFETIME);
    }

    #[test]
    fn test_with_token_lifetime() {
        let config = AuthConfig::try_new("a".repeat(32))
            .unwrap()
            .with_token_lifetime(Duration::from_secs(3600));
        assert_eq!(config.token_lifetime, Duration::from_secs(3600));
    }
}

//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed or missing input fields
    #[error("validation error: {0}")]
    Validation(String),

    /// Username or email already taken
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials. Covers unknown username, inactive account, and
    /// wrong password alike; the distinction is never surfaced so callers
    /// cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid token (malformed, bad signature, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Valid identity, insufficient role
    #[error("forbidden")]
    Forbidden,

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Conflict(_) => 409,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Forbidden => 403,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Forbidden => "FORBIDDEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<wardline_db::DbError> for AuthError {
    fn from(err: wardline_db::DbError) -> Self {
        match err {
            // The unique index is the authority on duplicates; the insert
            // error is the conflict signal, not any pre-check.
            wardline_db::DbError::UniqueViolation { .. } => {
                Self::Conflict("username or email already exists".to_string())
            }
            other => {
                tracing::error!("Database error: {}", other);
                Self::Database(other.to_string())
            }
        }
    }
}

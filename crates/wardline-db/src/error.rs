//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Unique constraint violated at insert time.
    ///
    /// Inserts race against each other on the unique indexes (username,
    /// email); the constraint is the authority, so this variant is the
    /// signal callers turn into a conflict response. Never pre-check.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Constraint name as reported by Postgres, if any
        constraint: String,
    },

    /// Record not found
    #[error("record not found")]
    NotFound,
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            // Postgres class 23505: unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return Self::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        Self::Sqlx(err)
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

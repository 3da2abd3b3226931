//! Wardline DB - Database abstractions
//!
//! SQLx-based database layer for Wardline services.
//!
//! # Example
//!
//! ```rust,ignore
//! use wardline_db::{create_pool, Repositories};
//!
//! let pool = create_pool("postgres://localhost/wardline").await?;
//! let repos = Repositories::new(pool);
//!
//! let user = repos.users.find_by_username("nurse.okafor").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, DbPool};
pub use repo::*;

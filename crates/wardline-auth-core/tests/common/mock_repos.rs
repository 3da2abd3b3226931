//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use wardline_db::{CreateUser, DbError, DbResult, UserRepository, UserRow};

/// In-memory user repository for testing.
///
/// Enforces the same username/email uniqueness the real store's indexes
/// do, and reports a violation from `create` the way Postgres would.
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_username: Arc<DashMap<String, Uuid>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Insert a row directly, bypassing uniqueness checks
    #[allow(dead_code)]
    pub fn insert_user(&self, user: UserRow) {
        self.by_username.insert(user.username.clone(), user.id);
        self.by_email.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }

    /// Fetch the stored password hash for assertions
    pub fn stored_hash(&self, username: &str) -> Option<String> {
        self.by_username
            .get(username)
            .and_then(|id| self.users.get(id.value()).map(|r| r.password_hash.clone()))
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_username
            .get(username)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        if self.by_username.contains_key(&user.username) {
            return Err(DbError::UniqueViolation {
                constraint: "users_username_key".to_string(),
            });
        }
        if self.by_email.contains_key(&user.email) {
            return Err(DbError::UniqueViolation {
                constraint: "users_email_key".to_string(),
            });
        }

        let row = UserRow {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash,
            role: user.role,
            full_name: user.full_name,
            active: true,
            created_at: Utc::now(),
        };

        self.by_username.insert(user.username, user.id);
        self.by_email.insert(user.email, user.id);
        self.users.insert(user.id, row.clone());
        Ok(row)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.active = active;
        }
        Ok(())
    }
}

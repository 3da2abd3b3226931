//! PostgreSQL audit log repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::AuditLogRow;
use crate::repo::{AuditLogRepository, CreateAuditLog};

/// PostgreSQL audit log repository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new audit log repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    async fn list_recent(&self, limit: i64) -> DbResult<Vec<AuditLogRow>> {
        let logs = sqlx::query_as::<_, AuditLogRow>(
            r#"
            SELECT id, user_id, action, details, ip_address, created_at
            FROM audit_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    async fn create(&self, entry: CreateAuditLog) -> DbResult<AuditLogRow> {
        let row = sqlx::query_as::<_, AuditLogRow>(
            r#"
            INSERT INTO audit_logs (id, user_id, action, details, ip_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, action, details, ip_address, created_at
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(&entry.details)
        .bind(&entry.ip_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

//! PostgreSQL alert repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::AlertRow;
use crate::repo::{AlertRepository, CreateAlert};

/// PostgreSQL alert repository
#[derive(Clone)]
pub struct PgAlertRepository {
    pool: PgPool,
}

impl PgAlertRepository {
    /// Create a new alert repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertRepository for PgAlertRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<AlertRow>> {
        let alert = sqlx::query_as::<_, AlertRow>(
            r#"
            SELECT id, alert_type, message, priority, related_user_id,
                   acknowledged, created_at, acknowledged_at
            FROM alerts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(alert)
    }

    async fn list_unacknowledged(&self) -> DbResult<Vec<AlertRow>> {
        let alerts = sqlx::query_as::<_, AlertRow>(
            r#"
            SELECT id, alert_type, message, priority, related_user_id,
                   acknowledged, created_at, acknowledged_at
            FROM alerts
            WHERE NOT acknowledged
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    async fn create(&self, alert: CreateAlert) -> DbResult<AlertRow> {
        let row = sqlx::query_as::<_, AlertRow>(
            r#"
            INSERT INTO alerts (id, alert_type, message, priority, related_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, alert_type, message, priority, related_user_id,
                      acknowledged, created_at, acknowledged_at
            "#,
        )
        .bind(alert.id)
        .bind(&alert.alert_type)
        .bind(&alert.message)
        .bind(&alert.priority)
        .bind(alert.related_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn acknowledge(&self, id: Uuid, acknowledged_at: DateTime<Utc>) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE alerts
            SET acknowledged = TRUE, acknowledged_at = $1
            WHERE id = $2
            "#,
        )
        .bind(acknowledged_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(crate::DbError::NotFound);
        }

        Ok(())
    }
}

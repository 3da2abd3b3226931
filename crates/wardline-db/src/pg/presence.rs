//! PostgreSQL staff presence repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use wardline_types::{Activity, PresenceStatus};

use crate::error::DbResult;
use crate::models::{PresenceBoardRow, StaffPresenceRow};
use crate::repo::{PresenceRepository, PresenceUpdate};

/// PostgreSQL staff presence repository
#[derive(Clone)]
pub struct PgPresenceRepository {
    pool: PgPool,
}

impl PgPresenceRepository {
    /// Create a new presence repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PresenceRepository for PgPresenceRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Option<StaffPresenceRow>> {
        let presence = sqlx::query_as::<_, StaffPresenceRow>(
            r#"
            SELECT id, user_id, status, activity, location, shift_start,
                   shift_end, last_active, assigned_patients
            FROM staff_presence
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(presence)
    }

    async fn board(&self) -> DbResult<Vec<PresenceBoardRow>> {
        let rows = sqlx::query_as::<_, PresenceBoardRow>(
            r#"
            SELECT p.id, p.user_id, u.full_name, u.role, p.status, p.activity,
                   p.location, p.assigned_patients, p.last_active
            FROM staff_presence p
            JOIN users u ON u.id = p.user_id
            ORDER BY u.full_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn on_duty(&self) -> DbResult<Vec<StaffPresenceRow>> {
        let rows = sqlx::query_as::<_, StaffPresenceRow>(
            r#"
            SELECT id, user_id, status, activity, location, shift_start,
                   shift_end, last_active, assigned_patients
            FROM staff_presence
            WHERE status = $1
            "#,
        )
        .bind(PresenceStatus::OnDuty.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_for_user(&self, user_id: Uuid) -> DbResult<StaffPresenceRow> {
        let row = sqlx::query_as::<_, StaffPresenceRow>(
            r#"
            INSERT INTO staff_presence (id, user_id)
            VALUES ($1, $2)
            RETURNING id, user_id, status, activity, location, shift_start,
                      shift_end, last_active, assigned_patients
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_status(&self, user_id: Uuid, update: PresenceUpdate) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE staff_presence
            SET status = COALESCE($1, status),
                activity = COALESCE($2, activity),
                location = COALESCE($3, location),
                last_active = NOW()
            WHERE user_id = $4
            "#,
        )
        .bind(&update.status)
        .bind(&update.activity)
        .bind(&update.location)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(crate::DbError::NotFound);
        }

        Ok(())
    }

    async fn clock_in(&self, user_id: Uuid, shift_start: DateTime<Utc>) -> DbResult<()> {
        sqlx::query(
            r#"
            UPDATE staff_presence
            SET status = $1, activity = $2, shift_start = $3, last_active = NOW()
            WHERE user_id = $4
            "#,
        )
        .bind(PresenceStatus::OnDuty.as_str())
        .bind(Activity::Active.as_str())
        .bind(shift_start)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_activity(&self, user_id: Uuid, activity: &str) -> DbResult<()> {
        sqlx::query("UPDATE staff_presence SET activity = $1 WHERE user_id = $2")
            .bind(activity)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

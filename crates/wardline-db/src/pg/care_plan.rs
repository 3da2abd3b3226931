//! PostgreSQL care-plan repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::CarePlanStepRow;
use crate::repo::{CarePlanRepository, CreateCarePlanStep};

/// PostgreSQL care-plan repository
#[derive(Clone)]
pub struct PgCarePlanRepository {
    pool: PgPool,
}

impl PgCarePlanRepository {
    /// Create a new care-plan repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarePlanRepository for PgCarePlanRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<CarePlanStepRow>> {
        let step = sqlx::query_as::<_, CarePlanStepRow>(
            r#"
            SELECT id, patient_id, title, description, assigned_to, due_time,
                   status, created_by, created_at, completed_at
            FROM care_plan_steps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(step)
    }

    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<CarePlanStepRow>> {
        let steps = sqlx::query_as::<_, CarePlanStepRow>(
            r#"
            SELECT id, patient_id, title, description, assigned_to, due_time,
                   status, created_by, created_at, completed_at
            FROM care_plan_steps
            WHERE patient_id = $1
            ORDER BY due_time ASC NULLS LAST
            "#,
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(steps)
    }

    async fn create(&self, step: CreateCarePlanStep) -> DbResult<CarePlanStepRow> {
        let row = sqlx::query_as::<_, CarePlanStepRow>(
            r#"
            INSERT INTO care_plan_steps
                (id, patient_id, title, description, assigned_to, due_time, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, patient_id, title, description, assigned_to, due_time,
                      status, created_by, created_at, completed_at
            "#,
        )
        .bind(step.id)
        .bind(step.patient_id)
        .bind(&step.title)
        .bind(&step.description)
        .bind(step.assigned_to)
        .bind(step.due_time)
        .bind(step.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        completed_at: Option<DateTime<Utc>>,
    ) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE care_plan_steps
            SET status = $1, completed_at = COALESCE($2, completed_at)
            WHERE id = $3
            "#,
        )
        .bind(status)
        .bind(completed_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(crate::DbError::NotFound);
        }

        Ok(())
    }
}

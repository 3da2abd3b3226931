//! PostgreSQL shift repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::ShiftRow;
use crate::repo::{CreateShift, ShiftRepository};

/// PostgreSQL shift repository
#[derive(Clone)]
pub struct PgShiftRepository {
    pool: PgPool,
}

impl PgShiftRepository {
    /// Create a new shift repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftRepository for PgShiftRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<ShiftRow>> {
        let shifts = sqlx::query_as::<_, ShiftRow>(
            r#"
            SELECT id, user_id, clock_in, clock_out, break_minutes,
                   overtime_minutes, date
            FROM shifts
            WHERE user_id = $1
            ORDER BY clock_in DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    async fn create(&self, shift: CreateShift) -> DbResult<ShiftRow> {
        let row = sqlx::query_as::<_, ShiftRow>(
            r#"
            INSERT INTO shifts (id, user_id, clock_in, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, clock_in, clock_out, break_minutes,
                      overtime_minutes, date
            "#,
        )
        .bind(shift.id)
        .bind(shift.user_id)
        .bind(shift.clock_in)
        .bind(&shift.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

//! PostgreSQL medication schedule repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use wardline_types::MedicationStatus;

use crate::error::DbResult;
use crate::models::MedicationScheduleRow;
use crate::repo::{CreateMedicationSchedule, MedicationRepository};

/// PostgreSQL medication schedule repository
#[derive(Clone)]
pub struct PgMedicationRepository {
    pool: PgPool,
}

impl PgMedicationRepository {
    /// Create a new medication repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicationRepository for PgMedicationRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<MedicationScheduleRow>> {
        let med = sqlx::query_as::<_, MedicationScheduleRow>(
            r#"
            SELECT id, patient_id, medication_name, dosage, route,
                   frequency_hours, start_time, next_dose_time,
                   last_administered_at, status, assigned_nurse_id, created_by
            FROM medication_schedules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(med)
    }

    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<MedicationScheduleRow>> {
        let meds = sqlx::query_as::<_, MedicationScheduleRow>(
            r#"
            SELECT id, patient_id, medication_name, dosage, route,
                   frequency_hours, start_time, next_dose_time,
                   last_administered_at, status, assigned_nurse_id, created_by
            FROM medication_schedules
            WHERE patient_id = $1
            ORDER BY next_dose_time ASC
            "#,
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(meds)
    }

    async fn create(&self, med: CreateMedicationSchedule) -> DbResult<MedicationScheduleRow> {
        let row = sqlx::query_as::<_, MedicationScheduleRow>(
            r#"
            INSERT INTO medication_schedules
                (id, patient_id, medication_name, dosage, route, frequency_hours,
                 start_time, next_dose_time, assigned_nurse_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, patient_id, medication_name, dosage, route,
                      frequency_hours, start_time, next_dose_time,
                      last_administered_at, status, assigned_nurse_id, created_by
            "#,
        )
        .bind(med.id)
        .bind(med.patient_id)
        .bind(&med.medication_name)
        .bind(&med.dosage)
        .bind(&med.route)
        .bind(med.frequency_hours)
        .bind(med.start_time)
        .bind(med.next_dose_time)
        .bind(med.assigned_nurse_id)
        .bind(med.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn mark_administered(
        &self,
        id: Uuid,
        administered_at: DateTime<Utc>,
        next_dose_time: DateTime<Utc>,
    ) -> DbResult<()> {
        sqlx::query(
            r#"
            UPDATE medication_schedules
            SET last_administered_at = $1, next_dose_time = $2, status = $3
            WHERE id = $4
            "#,
        )
        .bind(administered_at)
        .bind(next_dose_time)
        .bind(MedicationStatus::Scheduled.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

//! PostgreSQL vital-sign repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::VitalRecordRow;
use crate::repo::{CreateVitalRecord, VitalRepository};

/// PostgreSQL vital-sign repository
#[derive(Clone)]
pub struct PgVitalRepository {
    pool: PgPool,
}

impl PgVitalRepository {
    /// Create a new vital-sign repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VitalRepository for PgVitalRepository {
    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<VitalRecordRow>> {
        let records = sqlx::query_as::<_, VitalRecordRow>(
            r#"
            SELECT id, patient_id, recorded_by, temperature, blood_pressure,
                   pulse, respiration_rate, oxygen_saturation, notes, recorded_at
            FROM vital_records
            WHERE patient_id = $1
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn create(&self, vital: CreateVitalRecord) -> DbResult<VitalRecordRow> {
        let row = sqlx::query_as::<_, VitalRecordRow>(
            r#"
            INSERT INTO vital_records (id, patient_id, recorded_by, temperature,
                                       blood_pressure, pulse, respiration_rate,
                                       oxygen_saturation, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, patient_id, recorded_by, temperature, blood_pressure,
                      pulse, respiration_rate, oxygen_saturation, notes, recorded_at
            "#,
        )
        .bind(vital.id)
        .bind(vital.patient_id)
        .bind(vital.recorded_by)
        .bind(vital.temperature)
        .bind(&vital.blood_pressure)
        .bind(vital.pulse)
        .bind(vital.respiration_rate)
        .bind(vital.oxygen_saturation)
        .bind(&vital.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

//! PostgreSQL patient repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PatientRow;
use crate::repo::{CreatePatient, PatientRepository};

/// PostgreSQL patient repository
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: PgPool,
}

impl PgPatientRepository {
    /// Create a new patient repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PatientRow>> {
        let patient = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, name, age, gender, illness, room_number,
                   assigned_doctor_id, assigned_nurse_id, medical_history,
                   status, admitted_at
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patient)
    }

    async fn list(&self) -> DbResult<Vec<PatientRow>> {
        let patients = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, name, age, gender, illness, room_number,
                   assigned_doctor_id, assigned_nurse_id, medical_history,
                   status, admitted_at
            FROM patients
            ORDER BY admitted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    async fn create(&self, patient: CreatePatient) -> DbResult<PatientRow> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            INSERT INTO patients (id, name, age, gender, illness, room_number,
                                  assigned_doctor_id, assigned_nurse_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, age, gender, illness, room_number,
                      assigned_doctor_id, assigned_nurse_id, medical_history,
                      status, admitted_at
            "#,
        )
        .bind(patient.id)
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(&patient.illness)
        .bind(&patient.room_number)
        .bind(patient.assigned_doctor_id)
        .bind(patient.assigned_nurse_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

//! Patient handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{CreatePatient, PatientRepository, PatientRow};
use wardline_types::PatientId;

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub illness: String,
    pub room_number: String,
    pub assigned_doctor_id: Uuid,
    pub assigned_nurse_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub illness: String,
    pub room_number: String,
    pub assigned_doctor_id: Uuid,
    pub assigned_nurse_id: Uuid,
    pub status: String,
    pub admitted_at: DateTime<Utc>,
}

impl From<PatientRow> for PatientResponse {
    fn from(row: PatientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            illness: row.illness,
            room_number: row.room_number,
            assigned_doctor_id: row.assigned_doctor_id,
            assigned_nurse_id: row.assigned_nurse_id,
            status: row.status,
            admitted_at: row.admitted_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /patients
pub async fn create_patient(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreatePatientRequest>,
) -> ApiResult<Json<PatientResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if req.age < 0 {
        return Err(ApiError::Validation("age must be non-negative".to_string()));
    }

    let row = state
        .repos
        .patients
        .create(CreatePatient {
            id: PatientId::new().0,
            name: req.name.trim().to_string(),
            age: req.age,
            gender: req.gender,
            illness: req.illness,
            room_number: req.room_number,
            assigned_doctor_id: req.assigned_doctor_id,
            assigned_nurse_id: req.assigned_nurse_id,
        })
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "patient_created",
        format!("Patient {} registered", row.name),
        None,
    );

    Ok(Json(row.into()))
}

/// GET /patients
pub async fn list_patients(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> ApiResult<Json<Vec<PatientResponse>>> {
    let patients = state.repos.patients.list().await?;

    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

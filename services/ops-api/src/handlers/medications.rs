//! Medication schedule handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{
    CreateMedicationSchedule, MedicationRepository, MedicationScheduleRow, PatientRepository,
};

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddMedicationRequest {
    pub medication_name: String,
    pub dosage: String,
    pub route: Option<String>,
    pub frequency_hours: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub assigned_nurse_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct MarkAdministeredRequest {
    pub administered_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct MedicationResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub route: Option<String>,
    pub frequency_hours: i32,
    pub start_time: DateTime<Utc>,
    pub next_dose_time: DateTime<Utc>,
    pub last_administered_at: Option<DateTime<Utc>>,
    pub status: String,
    pub assigned_nurse_id: Option<Uuid>,
}

impl From<MedicationScheduleRow> for MedicationResponse {
    fn from(row: MedicationScheduleRow) -> Self {
        Self {
            id: row.id,
            patient_id: row.patient_id,
            medication_name: row.medication_name,
            dosage: row.dosage,
            route: row.route,
            frequency_hours: row.frequency_hours,
            start_time: row.start_time,
            next_dose_time: row.next_dose_time,
            last_administered_at: row.last_administered_at,
            status: row.status,
            assigned_nurse_id: row.assigned_nurse_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkAdministeredResponse {
    pub next_dose_time: DateTime<Utc>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /patients/{id}/medications
pub async fn list_medications(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
) -> ApiResult<Json<Vec<MedicationResponse>>> {
    let meds = state
        .repos
        .medications
        .find_by_patient_id(patient_id)
        .await?;

    Ok(Json(meds.into_iter().map(Into::into).collect()))
}

/// POST /patients/{id}/medications
pub async fn add_medication(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
    Json(req): Json<AddMedicationRequest>,
) -> ApiResult<Json<MedicationResponse>> {
    if req.medication_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "medication_name is required".to_string(),
        ));
    }
    if req.frequency_hours < 1 {
        return Err(ApiError::Validation(
            "frequency_hours must be at least 1".to_string(),
        ));
    }

    state
        .repos
        .patients
        .find_by_id(patient_id)
        .await?
        .ok_or(ApiError::NotFound("patient"))?;

    // The first dose is due at the schedule's start
    let start_time = req.start_time.unwrap_or_else(Utc::now);

    let row = state
        .repos
        .medications
        .create(CreateMedicationSchedule {
            id: Uuid::new_v4(),
            patient_id,
            medication_name: req.medication_name.trim().to_string(),
            dosage: req.dosage,
            route: req.route,
            frequency_hours: req.frequency_hours,
            start_time,
            next_dose_time: start_time,
            assigned_nurse_id: req.assigned_nurse_id,
            created_by: auth_user.user_id().0,
        })
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "medication_added",
        format!(
            "Medication {} scheduled for patient {patient_id}",
            row.medication_name
        ),
        None,
    );

    Ok(Json(row.into()))
}

/// POST /medications/{id}/mark-administered
pub async fn mark_administered(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(medication_id): Path<Uuid>,
    Json(req): Json<MarkAdministeredRequest>,
) -> ApiResult<Json<MarkAdministeredResponse>> {
    let med = state
        .repos
        .medications
        .find_by_id(medication_id)
        .await?
        .ok_or(ApiError::NotFound("medication schedule"))?;

    let administered_at = req.administered_time.unwrap_or_else(Utc::now);
    let next_dose_time = administered_at + Duration::hours(i64::from(med.frequency_hours));

    state
        .repos
        .medications
        .mark_administered(medication_id, administered_at, next_dose_time)
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "medication_administered",
        format!(
            "Medication {} administered for patient {}",
            med.medication_name, med.patient_id
        ),
        None,
    );

    Ok(Json(MarkAdministeredResponse { next_dose_time }))
}

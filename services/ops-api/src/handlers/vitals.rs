//! Vital-sign handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{CreateVitalRecord, PatientRepository, VitalRecordRow, VitalRepository};

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RecordVitalsRequest {
    pub temperature: Option<f64>,
    pub blood_pressure: Option<String>,
    pub pulse: Option<i32>,
    pub respiration_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VitalRecordResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_by: Uuid,
    pub temperature: Option<f64>,
    pub blood_pressure: Option<String>,
    pub pulse: Option<i32>,
    pub respiration_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<VitalRecordRow> for VitalRecordResponse {
    fn from(row: VitalRecordRow) -> Self {
        Self {
            id: row.id,
            patient_id: row.patient_id,
            recorded_by: row.recorded_by,
            temperature: row.temperature,
            blood_pressure: row.blood_pressure,
            pulse: row.pulse,
            respiration_rate: row.respiration_rate,
            oxygen_saturation: row.oxygen_saturation,
            notes: row.notes,
            recorded_at: row.recorded_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /patients/{id}/vitals
pub async fn list_vitals(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
) -> ApiResult<Json<Vec<VitalRecordResponse>>> {
    let records = state.repos.vitals.find_by_patient_id(patient_id).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// POST /patients/{id}/vitals
pub async fn record_vitals(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
    Json(req): Json<RecordVitalsRequest>,
) -> ApiResult<Json<VitalRecordResponse>> {
    // The write must attach to an existing patient
    state
        .repos
        .patients
        .find_by_id(patient_id)
        .await?
        .ok_or(ApiError::NotFound("patient"))?;

    let row = state
        .repos
        .vitals
        .create(CreateVitalRecord {
            id: Uuid::new_v4(),
            patient_id,
            recorded_by: auth_user.user_id().0,
            temperature: req.temperature,
            blood_pressure: req.blood_pressure,
            pulse: req.pulse,
            respiration_rate: req.respiration_rate,
            oxygen_saturation: req.oxygen_saturation,
            notes: req.notes,
        })
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "vitals_recorded",
        format!("Vitals recorded for patient {patient_id}"),
        None,
    );

    Ok(Json(row.into()))
}

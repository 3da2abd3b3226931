//! Care-plan handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{CarePlanRepository, CarePlanStepRow, CreateCarePlanStep, PatientRepository};
use wardline_types::WorkStatus;

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddCarePlanStepRequest {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub due_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CarePlanStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CarePlanStepResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub due_time: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<CarePlanStepRow> for CarePlanStepResponse {
    fn from(row: CarePlanStepRow) -> Self {
        Self {
            id: row.id,
            patient_id: row.patient_id,
            title: row.title,
            description: row.description,
            assigned_to: row.assigned_to,
            due_time: row.due_time,
            status: row.status,
            created_at: row.created_at,
            completed_at: row.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarePlanStatusResponse {
    pub status: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /patients/{id}/care-plan
pub async fn list_care_plan(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
) -> ApiResult<Json<Vec<CarePlanStepResponse>>> {
    let steps = state
        .repos
        .care_plans
        .find_by_patient_id(patient_id)
        .await?;

    Ok(Json(steps.into_iter().map(Into::into).collect()))
}

/// POST /patients/{id}/care-plan
pub async fn add_care_plan_step(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(patient_id): Path<Uuid>,
    Json(req): Json<AddCarePlanStepRequest>,
) -> ApiResult<Json<CarePlanStepResponse>> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }

    state
        .repos
        .patients
        .find_by_id(patient_id)
        .await?
        .ok_or(ApiError::NotFound("patient"))?;

    let row = state
        .repos
        .care_plans
        .create(CreateCarePlanStep {
            id: Uuid::new_v4(),
            patient_id,
            title: req.title.trim().to_string(),
            description: req.description,
            assigned_to: req.assigned_to,
            due_time: req.due_time,
            created_by: auth_user.user_id().0,
        })
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "care_plan_added",
        format!(
            "Care plan step '{}' created for patient {patient_id}",
            row.title
        ),
        None,
    );

    Ok(Json(row.into()))
}

/// POST /care-plan/{id}/status
pub async fn update_care_plan_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(step_id): Path<Uuid>,
    Json(req): Json<CarePlanStatusRequest>,
) -> ApiResult<Json<CarePlanStatusResponse>> {
    let status: WorkStatus = req
        .status
        .parse()
        .map_err(|_| ApiError::Validation(format!("invalid status: {}", req.status)))?;

    let completed_at = (status == WorkStatus::Completed).then(Utc::now);

    state
        .repos
        .care_plans
        .update_status(step_id, status.as_str(), completed_at)
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "care_plan_update",
        format!("Care plan step {step_id} marked as {status}"),
        None,
    );

    Ok(Json(CarePlanStatusResponse {
        status: status.to_string(),
    }))
}

//! Staff presence handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{PresenceRepository, PresenceUpdate};
use wardline_types::{Activity, PresenceStatus};

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PresenceEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub role: String,
    pub status: String,
    pub activity: String,
    pub location: String,
    pub assigned_patients: i32,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
    pub activity: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub status: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /staff/presence
///
/// The presence board: every staff member's status joined with their
/// identity fields. Clients poll this; nothing is pushed.
pub async fn staff_presence(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> ApiResult<Json<Vec<PresenceEntry>>> {
    let rows = state.repos.presence.board().await?;

    let entries = rows
        .into_iter()
        .map(|row| PresenceEntry {
            id: row.id,
            user_id: row.user_id,
            full_name: row.full_name,
            role: row.role,
            status: row.status,
            activity: row.activity,
            location: row.location,
            assigned_patients: row.assigned_patients,
            last_active: row.last_active,
        })
        .collect();

    Ok(Json(entries))
}

/// POST /staff/update-status
///
/// Update the caller's own presence record and bump last_active.
pub async fn update_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<StatusUpdateRequest>,
) -> ApiResult<Json<StatusUpdateResponse>> {
    let status: PresenceStatus = req
        .status
        .parse()
        .map_err(|_| ApiError::Validation(format!("invalid status: {}", req.status)))?;

    let activity = req
        .activity
        .as_deref()
        .map(|a| {
            a.parse::<Activity>()
                .map_err(|_| ApiError::Validation(format!("invalid activity: {a}")))
        })
        .transpose()?;

    state
        .repos
        .presence
        .update_status(
            auth_user.user_id().0,
            PresenceUpdate {
                status: Some(status.to_string()),
                activity: activity.map(|a| a.to_string()),
                location: req.location.clone(),
            },
        )
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "status_update",
        format!("Status: {}, Activity: {:?}", status, req.activity),
        None,
    );

    Ok(Json(StatusUpdateResponse {
        status: status.to_string(),
    }))
}

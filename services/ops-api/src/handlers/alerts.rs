//! Alert handlers

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use wardline_db::{AlertRepository, AlertRow};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub id: Uuid,
    pub alert_type: String,
    pub message: String,
    pub priority: String,
    pub related_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<AlertRow> for AlertResponse {
    fn from(row: AlertRow) -> Self {
        Self {
            id: row.id,
            alert_type: row.alert_type,
            message: row.message,
            priority: row.priority,
            related_user_id: row.related_user_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AcknowledgeResponse {
    pub acknowledged: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /alerts
///
/// Unacknowledged alerts, newest first. Clients poll this list.
pub async fn list_alerts(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> ApiResult<Json<Vec<AlertResponse>>> {
    let alerts = state.repos.alerts.list_unacknowledged().await?;

    Ok(Json(alerts.into_iter().map(Into::into).collect()))
}

/// POST /alerts/{id}/acknowledge
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(alert_id): Path<Uuid>,
) -> ApiResult<Json<AcknowledgeResponse>> {
    state.repos.alerts.acknowledge(alert_id, Utc::now()).await?;

    Ok(Json(AcknowledgeResponse { acknowledged: true }))
}

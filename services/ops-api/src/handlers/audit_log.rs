//! Audit log handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use wardline_db::{AuditLogRepository, AuditLogRow};
use wardline_types::Role;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// How many entries the audit view returns
const AUDIT_LOG_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
pub struct AuditLogResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLogRow> for AuditLogResponse {
    fn from(row: AuditLogRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            action: row.action,
            details: row.details,
            created_at: row.created_at,
        }
    }
}

/// GET /audit-logs (admin only)
pub async fn list_audit_logs(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    auth_user.require_any(&[Role::Admin])?;

    let logs = state.repos.audit_logs.list_recent(AUDIT_LOG_LIMIT).await?;

    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

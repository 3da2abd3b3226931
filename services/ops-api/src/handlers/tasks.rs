//! Task handlers

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wardline_db::{CreateTask, TaskRepository, TaskRow};
use wardline_types::TaskPriority;

use crate::audit;
use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub assigned_to: Uuid,
    pub priority: String,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assigned_to: Uuid,
    pub assigned_by: Uuid,
    pub priority: String,
    pub status: String,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<TaskRow> for TaskResponse {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            assigned_to: row.assigned_to,
            assigned_by: row.assigned_by,
            priority: row.priority,
            status: row.status,
            deadline: row.deadline,
            created_at: row.created_at,
            completed_at: row.completed_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }

    let priority: TaskPriority = req
        .priority
        .parse()
        .map_err(|_| ApiError::Validation(format!("invalid priority: {}", req.priority)))?;

    let row = state
        .repos
        .tasks
        .create(CreateTask {
            id: Uuid::new_v4(),
            title: req.title.trim().to_string(),
            description: req.description,
            assigned_to: req.assigned_to,
            assigned_by: auth_user.user_id().0,
            priority: priority.to_string(),
            deadline: req.deadline,
        })
        .await?;

    audit::record(
        &state.repos,
        auth_user.user_id(),
        "task_created",
        format!("Task '{}' assigned", row.title),
        None,
    );

    Ok(Json(row.into()))
}

/// GET /tasks
///
/// Admins see every task; everyone else sees their own assignments.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = if auth_user.role().sees_all_tasks() {
        state.repos.tasks.list_all().await?
    } else {
        state
            .repos
            .tasks
            .list_assigned_to(auth_user.user_id().0)
            .await?
    };

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

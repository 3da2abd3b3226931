//! PostgreSQL task repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::TaskRow;
use crate::repo::{CreateTask, TaskRepository};

/// PostgreSQL task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new task repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list_all(&self) -> DbResult<Vec<TaskRow>> {
        let tasks = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, assigned_to, assigned_by, priority,
                   status, deadline, created_at, completed_at
            FROM tasks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn list_assigned_to(&self, user_id: Uuid) -> DbResult<Vec<TaskRow>> {
        let tasks = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, assigned_to, assigned_by, priority,
                   status, deadline, created_at, completed_at
            FROM tasks
            WHERE assigned_to = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn create(&self, task: CreateTask) -> DbResult<TaskRow> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (id, title, description, assigned_to, assigned_by,
                               priority, deadline)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, assigned_to, assigned_by, priority,
                      status, deadline, created_at, completed_at
            "#,
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assigned_to)
        .bind(task.assigned_by)
        .bind(&task.priority)
        .bind(task.deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

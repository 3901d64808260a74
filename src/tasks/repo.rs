use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::ApiError;
use crate::tasks::dto::{CreateTaskRequest, UpdateTaskRequest};

/// Task record. The `created_at` column is aliased to `timestamp` in every
/// query so the row shape matches the JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub task_id: String,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub status: bool,
    pub timestamp: OffsetDateTime,
}

impl Task {
    /// Insert a new task. The timestamp is assigned by the database.
    pub async fn create(
        db: &PgPool,
        task_id: &str,
        req: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO task (task_id, user_id, title, body, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, user_id, title, body, status, created_at AS timestamp
            "#,
        )
        .bind(task_id)
        .bind(req.user_id)
        .bind(&req.title)
        .bind(&req.body)
        .bind(req.status)
        .fetch_one(db)
        .await?;
        Ok(task)
    }

    pub async fn get_by_id(db: &PgPool, task_id: &str) -> Result<Task, ApiError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, user_id, title, body, status, created_at AS timestamp
            FROM task
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(db)
        .await?;
        task.ok_or_else(|| ApiError::NotFound(format!("task {} not found", task_id)))
    }

    /// All tasks, in whatever order the store returns them.
    pub async fn list(db: &PgPool) -> Result<Vec<Task>, ApiError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, user_id, title, body, status, created_at AS timestamp
            FROM task
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(tasks)
    }

    /// Tasks owned by the given user; empty when none match.
    pub async fn list_by_user(db: &PgPool, user_id: i32) -> Result<Vec<Task>, ApiError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, user_id, title, body, status, created_at AS timestamp
            FROM task
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(tasks)
    }

    /// Overwrite title/body/status, then return the refreshed record. The
    /// UPDATE succeeds on zero affected rows; an unknown id surfaces as
    /// NotFound from the follow-up read.
    pub async fn update(
        db: &PgPool,
        task_id: &str,
        req: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        sqlx::query(
            r#"
            UPDATE task
            SET title = $1, body = $2, status = $3
            WHERE task_id = $4
            "#,
        )
        .bind(&req.title)
        .bind(&req.body)
        .bind(req.status)
        .bind(task_id)
        .execute(db)
        .await?;

        Task::get_by_id(db, task_id).await
    }

    /// Delete by id. Deleting an absent id is not an error.
    pub async fn delete_by_id(db: &PgPool, task_id: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM task WHERE task_id = $1")
            .bind(task_id)
            .execute(db)
            .await?;
        Ok(())
    }
}

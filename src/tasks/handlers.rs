use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    tasks::{
        dto::{CreateTaskRequest, MessageResponse, UpdateTaskRequest},
        repo::Task,
    },
};

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks/", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id/",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/user/:id/", get(tasks_for_user))
}

#[instrument(skip(state))]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = Task::get_by_id(&state.db, &id).await?;
    Ok(Json(task))
}

#[instrument(skip(state))]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

#[instrument(skip(state))]
pub async fn tasks_for_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Path(user_id) = user_id.map_err(|e| {
        warn!(error = %e, "user id is not an integer");
        ApiError::Decoding(e.body_text())
    })?;

    let tasks = Task::list_by_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "malformed create payload");
        ApiError::Decoding(e.body_text())
    })?;

    let task_id = Uuid::new_v4().to_string();
    let task = Task::create(&state.db, &task_id, &payload).await?;

    info!(task_id = %task.task_id, user_id = task.user_id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(skip(state, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "malformed update payload");
        ApiError::Decoding(e.body_text())
    })?;

    let task = Task::update(&state.db, &id, &payload).await?;
    info!(task_id = %task.task_id, "task updated");
    Ok(Json(task))
}

#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    Task::delete_by_id(&state.db, &id).await?;

    info!(task_id = %id, "task deleted");
    Ok(Json(MessageResponse {
        message: "Task deleted successfully".into(),
    }))
}

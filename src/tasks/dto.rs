use serde::{Deserialize, Serialize};

/// Request body for task creation. A client-supplied `task_id` is ignored;
/// the server always assigns a fresh identifier.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub user_id: i32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub status: bool,
}

/// Request body for task update. Overwrites all three mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub body: String,
    pub status: bool,
}

/// Response carrying a status message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

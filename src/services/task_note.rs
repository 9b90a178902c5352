//! Task Note Service
//!
//! Failures on these endpoints resolve to the client's fallback responses,
//! so a missing note reads as "no note".

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{SaveTaskNoteRequest, TaskNote};

pub async fn note_exists(task_id: i64) -> Result<bool, ApiError> {
    ApiClient::new()
        .get(&format!("/task-notes/task/{}/exists", task_id))
        .await
}

pub async fn task_note(task_id: i64) -> Result<TaskNote, ApiError> {
    ApiClient::new().get(&format!("/task-notes/task/{}", task_id)).await
}

pub async fn save_task_note(request: &SaveTaskNoteRequest) -> Result<TaskNote, ApiError> {
    ApiClient::new().post("/task-notes", request).await
}

pub async fn delete_task_note(task_id: i64) -> Result<(), ApiError> {
    ApiClient::new().delete(&format!("/task-notes/task/{}", task_id)).await
}

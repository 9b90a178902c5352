//! Task Service

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{StatusUpdate, Task, TaskPage, TaskRequest, TaskSearch, TaskStats, TaskStatus};

pub async fn tasks(search: &TaskSearch) -> Result<TaskPage, ApiError> {
    ApiClient::new()
        .get_with_query("/tasks", &search.to_query_pairs())
        .await
}

pub async fn task(id: i64) -> Result<Task, ApiError> {
    ApiClient::new().get(&format!("/tasks/{}", id)).await
}

pub async fn create_task(request: &TaskRequest) -> Result<Task, ApiError> {
    ApiClient::new().post("/tasks", request).await
}

pub async fn update_task(id: i64, request: &TaskRequest) -> Result<Task, ApiError> {
    ApiClient::new().put(&format!("/tasks/{}", id), request).await
}

pub async fn update_task_status(id: i64, status: TaskStatus) -> Result<Task, ApiError> {
    ApiClient::new()
        .patch(&format!("/tasks/{}/status", id), &StatusUpdate { status })
        .await
}

pub async fn delete_task(id: i64) -> Result<(), ApiError> {
    ApiClient::new().delete(&format!("/tasks/{}", id)).await
}

pub async fn task_stats() -> Result<TaskStats, ApiError> {
    ApiClient::new().get("/tasks/stats").await
}

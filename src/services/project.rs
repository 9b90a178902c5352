//! Project Service
//!
//! Project CRUD, document uploads and member search.

use reqwest::multipart::{Form, Part};

use super::{encode_segment, ApiClient};
use crate::error::ApiError;
use crate::forms::StagedDocument;
use crate::models::{CreateProjectRequest, DashboardStats, Project, User};
use crate::session;

pub async fn search_users(query: &str) -> Result<Vec<User>, ApiError> {
    ApiClient::new()
        .get(&format!("/users/search?q={}", encode_segment(query)))
        .await
}

/// Projects visible to the logged-in user
pub async fn user_projects() -> Result<Vec<Project>, ApiError> {
    if !session::has_token() {
        return Err(ApiError::MissingToken);
    }
    ApiClient::new().get("/projects").await
}

pub async fn search_projects(query: &str) -> Result<Vec<Project>, ApiError> {
    ApiClient::new()
        .get(&format!("/projects/search?q={}", encode_segment(query)))
        .await
}

pub async fn project(id: i64) -> Result<Project, ApiError> {
    ApiClient::new().get(&format!("/projects/{}", id)).await
}

/// Create the project, then upload staged documents one by one
pub async fn create_project(
    request: &CreateProjectRequest,
    documents: &[StagedDocument],
) -> Result<Project, ApiError> {
    let client = ApiClient::new();
    let created: Project = client.post("/projects", request).await.map_err(|e| {
        log::error!("Error in create_project: {}", e);
        e
    })?;
    log::info!("Project created: #{} {}", created.id, created.name);
    upload_all(&client, created, documents).await
}

/// Update fields, then upload any newly staged documents
pub async fn update_project(
    id: i64,
    request: &CreateProjectRequest,
    documents: &[StagedDocument],
) -> Result<Project, ApiError> {
    let client = ApiClient::new();
    let updated: Project = client.put(&format!("/projects/{}", id), request).await?;
    upload_all(&client, updated, documents).await
}

async fn upload_all(
    client: &ApiClient,
    mut project: Project,
    documents: &[StagedDocument],
) -> Result<Project, ApiError> {
    for document in documents {
        log::debug!("Uploading document: {}", document.name);
        project = upload_with(client, project.id, document).await.map_err(|e| {
            log::error!("Error uploading document {}: {}", document.name, e);
            ApiError::DocumentUpload {
                name: document.name.clone(),
                message: e.to_string(),
            }
        })?;
        log::info!("Document uploaded: {}", document.name);
    }
    Ok(project)
}

/// Attach one document; the response reflects the new document list
pub async fn upload_document(project_id: i64, document: &StagedDocument) -> Result<Project, ApiError> {
    upload_with(&ApiClient::new(), project_id, document).await
}

async fn upload_with(client: &ApiClient, project_id: i64, document: &StagedDocument) -> Result<Project, ApiError> {
    let mut part = Part::bytes(document.bytes.clone()).file_name(document.name.clone());
    if !document.mime.is_empty() {
        part = part.mime_str(&document.mime).map_err(|source| ApiError::Transport {
            path: format!("/projects/{}/documents", project_id),
            source,
        })?;
    }
    let form = Form::new().part("file", part);
    client
        .post_multipart(&format!("/projects/{}/documents", project_id), form)
        .await
}

pub async fn delete_project(id: i64) -> Result<(), ApiError> {
    ApiClient::new().delete(&format!("/projects/{}", id)).await
}

pub async fn project_stats() -> Result<DashboardStats, ApiError> {
    ApiClient::new().get("/projects/stats").await
}

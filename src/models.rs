//! Frontend Models
//!
//! Data structures matching backend DTOs (camelCase JSON).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a SCREAMING_SNAKE_CASE wire enum with labels and parsing
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self { $($name::$variant => $wire),+ }
            }

            pub fn label(self) -> &'static str {
                match self { $($name::$variant => $label),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {}", stringify!($name), other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Project lifecycle status
    ProjectStatus {
        Active => ("ACTIVE", "Active"),
        Completed => ("COMPLETED", "Completed"),
        OnHold => ("ON_HOLD", "On Hold"),
        Archived => ("ARCHIVED", "Archived"),
    }
}

wire_enum! {
    /// Shared by projects and tasks
    Priority {
        Urgent => ("URGENT", "Urgent"),
        High => ("HIGH", "High"),
        Medium => ("MEDIUM", "Medium"),
        Low => ("LOW", "Low"),
    }
}

wire_enum! {
    TaskStatus {
        Todo => ("TODO", "To Do"),
        InProgress => ("IN_PROGRESS", "In Progress"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Avatar letter
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub documents: Vec<ProjectDocument>,
    #[serde(default)]
    pub total_documents: u32,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub in_progress_tasks: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    // Permissions computed by the backend for the current user
    #[serde(default)]
    pub current_user_role: Option<String>,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

/// Minimal project reference embedded in tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Paged task listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    #[serde(default)]
    pub content: Vec<Task>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub todo_tasks: u64,
    #[serde(default)]
    pub in_progress_tasks: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub overdue_tasks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub in_progress_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNote {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub note_name: Option<String>,
    #[serde(default)]
    pub note_content: String,
    #[serde(default)]
    pub reminder_tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl TaskNote {
    /// Fallback notes have no id and no content
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.note_content.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Project create/update body; documents are uploaded separately
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub member_emails: Vec<String>,
    pub send_email: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTaskNoteRequest {
    pub task_id: i64,
    pub note_name: Option<String>,
    pub note_content: String,
    pub reminder_tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Task listing filters; only present fields become query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSearch {
    pub query: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl TaskSearch {
    /// All tasks of one project, first page of 100
    pub fn for_project(project_id: i64) -> Self {
        Self {
            project_id: Some(project_id),
            page: Some(0),
            size: Some(100),
            ..Default::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.query.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("query", q.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(id) = self.project_id {
            pairs.push(("projectId", id.to_string()));
        }
        if let Some(id) = self.assignee_id {
            pairs.push(("assigneeId", id.to_string()));
        }
        if let Some(id) = self.creator_id {
            pairs.push(("creatorId", id.to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("sortBy", sort_by.to_string()));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push(("sortDirection", direction.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_decodes_with_missing_optionals() {
        let json = r#"{
            "id": 7,
            "name": "Website",
            "status": "ON_HOLD",
            "priority": "URGENT",
            "owner": {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "createdAt": "2024-03-01T09:30:00",
            "canEdit": true
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(project.priority, Priority::Urgent);
        assert!(project.members.is_empty());
        assert_eq!(project.total_tasks, 0);
        assert!(project.can_edit);
        assert!(!project.can_delete);
        assert_eq!(project.owner.unwrap().display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_create_request_skips_empty_optionals() {
        let request = CreateProjectRequest {
            name: "Launch".into(),
            description: None,
            priority: Priority::High,
            deadline: None,
            member_emails: vec!["a@example.com".into()],
            send_email: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Launch",
                "priority": "HIGH",
                "memberEmails": ["a@example.com"],
                "sendEmail": true
            })
        );
    }

    #[test]
    fn test_task_search_only_emits_present_fields() {
        let search = TaskSearch {
            status: Some(TaskStatus::InProgress),
            sort_direction: Some(SortDirection::Desc),
            ..TaskSearch::for_project(12)
        };
        assert_eq!(
            search.to_query_pairs(),
            vec![
                ("status", "IN_PROGRESS".to_string()),
                ("projectId", "12".to_string()),
                ("sortDirection", "DESC".to_string()),
                ("page", "0".to_string()),
                ("size", "100".to_string()),
            ]
        );
        assert!(TaskSearch::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_wire_enum_parses_and_labels() {
        assert_eq!("ON_HOLD".parse::<ProjectStatus>(), Ok(ProjectStatus::OnHold));
        assert!("on_hold".parse::<ProjectStatus>().is_err());
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(Priority::ALL.len(), 4);
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user = User { id: 3, first_name: " ".into(), last_name: String::new(), email: "x@example.com".into() };
        assert_eq!(user.display_name(), "x@example.com");
        assert_eq!(user.initial(), "X");
    }

    #[test]
    fn test_auth_response_accepts_access_token_alias() {
        let auth: AuthResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(auth.token, "abc");
        assert!(auth.user.is_none());
    }
}

//! Form State
//!
//! Editable state behind the project and task modals, with the client-side
//! validation that turns it into request payloads.

use crate::format::file_size;
use crate::models::{CreateProjectRequest, Priority, Project, Task, TaskRequest, TaskStatus};

/// Split `items` at `max_bytes`: `(kept, names of the ones over the limit)`
pub fn split_by_size<T>(
    items: Vec<T>,
    max_bytes: u64,
    size: impl Fn(&T) -> u64,
    name: impl Fn(&T) -> String,
) -> (Vec<T>, Vec<String>) {
    let mut kept = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for item in items {
        if size(&item) > max_bytes {
            rejected.push(name(&item));
        } else {
            kept.push(item);
        }
    }
    (kept, rejected)
}

/// User-facing notice for files skipped by the size limit
pub fn oversized_message(names: &[String], max_bytes: u64) -> String {
    format!("Files over {} were skipped: {}", file_size(max_bytes), names.join(", "))
}

/// A file picked in the browser, read into memory until submit
#[derive(Debug, Clone, PartialEq)]
pub struct StagedDocument {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl StagedDocument {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` from the date input, empty when unset
    pub deadline: String,
    pub member_emails: Vec<String>,
    pub documents: Vec<StagedDocument>,
    pub send_email: bool,
}

impl ProjectForm {
    /// Prefill for editing; documents start empty
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            priority: project.priority,
            deadline: project
                .deadline
                .as_deref()
                .map(date_input_value)
                .unwrap_or_default(),
            member_emails: project.members.iter().map(|m| m.email.clone()).collect(),
            documents: Vec::new(),
            send_email: false,
        }
    }

    /// Returns false when the email was already a member
    pub fn add_member(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() || self.member_emails.iter().any(|e| e == email) {
            return false;
        }
        self.member_emails.push(email.to_string());
        true
    }

    pub fn remove_member(&mut self, email: &str) {
        self.member_emails.retain(|e| e != email);
    }

    /// Stage files, rejecting any over `max_bytes`. Returns rejected names.
    pub fn stage_documents(&mut self, documents: Vec<StagedDocument>, max_bytes: u64) -> Vec<String> {
        let (kept, rejected) = split_by_size(documents, max_bytes, StagedDocument::size, |d| d.name.clone());
        self.documents.extend(kept);
        rejected
    }

    pub fn remove_document(&mut self, index: usize) {
        if index < self.documents.len() {
            self.documents.remove(index);
        }
    }

    pub fn validate(&self) -> Result<CreateProjectRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Project name is required".to_string());
        }
        Ok(CreateProjectRequest {
            name: name.to_string(),
            description: non_blank(&self.description),
            priority: self.priority,
            deadline: non_blank(&self.deadline),
            member_emails: self.member_emails.clone(),
            send_email: self.send_email,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String,
    pub project_id: Option<i64>,
    pub assignee_id: Option<i64>,
}

impl TaskForm {
    pub fn for_project(project_id: i64) -> Self {
        Self {
            project_id: Some(project_id),
            ..Default::default()
        }
    }

    pub fn from_task(task: &Task, project_id: i64) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.as_deref().map(date_input_value).unwrap_or_default(),
            project_id: task.project.as_ref().map(|p| p.id).or(Some(project_id)),
            assignee_id: task.assignee.as_ref().map(|u| u.id),
        }
    }

    pub fn validate(&self) -> Result<TaskRequest, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Task title is required".to_string());
        }
        let project_id = self.project_id.ok_or_else(|| "A project is required".to_string())?;
        Ok(TaskRequest {
            title: title.to_string(),
            description: non_blank(&self.description),
            status: self.status,
            priority: self.priority,
            due_date: non_blank(&self.due_date),
            project_id,
            assignee_id: self.assignee_id,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Date inputs want `YYYY-MM-DD`; backend timestamps carry a time part
fn date_input_value(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectStatus, User};

    fn doc(name: &str, size: usize) -> StagedDocument {
        StagedDocument { name: name.into(), mime: "application/pdf".into(), bytes: vec![0; size] }
    }

    fn member(id: i64, email: &str) -> User {
        User { id, first_name: "M".into(), last_name: format!("{}", id), email: email.into() }
    }

    #[test]
    fn test_empty_project_name_is_rejected() {
        let form = ProjectForm { name: "   ".into(), ..Default::default() };
        assert_eq!(form.validate(), Err("Project name is required".to_string()));
    }

    #[test]
    fn test_valid_form_trims_and_drops_blanks() {
        let form = ProjectForm {
            name: "  Launch ".into(),
            description: "  ".into(),
            deadline: "2025-02-01".into(),
            priority: Priority::Low,
            ..Default::default()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Launch");
        assert_eq!(request.description, None);
        assert_eq!(request.deadline.as_deref(), Some("2025-02-01"));
        assert_eq!(request.priority, Priority::Low);
    }

    #[test]
    fn test_members_are_added_once() {
        let mut form = ProjectForm::default();
        assert!(form.add_member("a@example.com"));
        assert!(!form.add_member("a@example.com"));
        assert!(form.add_member("b@example.com"));
        form.remove_member("a@example.com");
        assert_eq!(form.member_emails, vec!["b@example.com".to_string()]);
    }

    #[test]
    fn test_oversized_documents_are_not_staged() {
        let mut form = ProjectForm::default();
        let rejected = form.stage_documents(vec![doc("small.pdf", 10), doc("huge.pdf", 101)], 100);
        assert_eq!(rejected, vec!["huge.pdf".to_string()]);
        assert_eq!(form.documents.len(), 1);
        form.remove_document(5);
        form.remove_document(0);
        assert!(form.documents.is_empty());
    }

    #[test]
    fn test_size_split_rejects_before_reading_bytes() {
        // Sizes as reported by the browser, nothing loaded yet
        let picked = vec![("notes.txt".to_string(), 512u64), ("backup.iso".to_string(), 3 * 1024 * 1024 * 1024)];
        let (kept, rejected) = split_by_size(picked, 10 * 1024 * 1024, |f| f.1, |f| f.0.clone());
        assert_eq!(kept, vec![("notes.txt".to_string(), 512)]);
        assert_eq!(rejected, vec!["backup.iso".to_string()]);
    }

    #[test]
    fn test_oversized_message_uses_configured_limit() {
        let names = vec!["a.pdf".to_string(), "b.pdf".to_string()];
        assert_eq!(oversized_message(&names, 10 * 1024 * 1024), "Files over 10.0 MB were skipped: a.pdf, b.pdf");
        assert_eq!(oversized_message(&names[..1], 512 * 1024), "Files over 512.0 KB were skipped: a.pdf");
    }

    #[test]
    fn test_edit_prefill_uses_member_emails_and_date_part() {
        let project = Project {
            id: 1,
            name: "Site".into(),
            description: None,
            status: ProjectStatus::Active,
            priority: Priority::High,
            owner: None,
            members: vec![member(2, "two@example.com"), member(3, "three@example.com")],
            documents: vec![],
            total_documents: 0,
            total_tasks: 0,
            completed_tasks: 0,
            in_progress_tasks: 0,
            created_at: "2024-01-01T00:00:00".into(),
            updated_at: None,
            deadline: Some("2024-06-30T00:00:00".into()),
            current_user_role: None,
            can_view: true,
            can_edit: true,
            can_delete: true,
        };
        let form = ProjectForm::from_project(&project);
        assert_eq!(form.deadline, "2024-06-30");
        assert_eq!(form.member_emails.len(), 2);
        assert!(form.member_emails.iter().any(|e| e == "three@example.com"));
        assert!(!form.send_email);
    }

    #[test]
    fn test_task_form_requires_title_and_project() {
        let mut form = TaskForm::default();
        form.title = "Write docs".into();
        assert_eq!(form.validate(), Err("A project is required".to_string()));

        let mut form = TaskForm::for_project(4);
        assert_eq!(form.validate(), Err("Task title is required".to_string()));
        form.title = "Write docs".into();
        form.assignee_id = Some(9);
        let request = form.validate().unwrap();
        assert_eq!(request.project_id, 4);
        assert_eq!(request.status, TaskStatus::Todo);
        assert_eq!(request.assignee_id, Some(9));
    }
}

//! Task Row Component
//!
//! One task in the project detail list: badges, quick status change,
//! permission-gated edit/delete and the note toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, TaskNotePanel, TaskStatusSelect};
use crate::context::Flash;
use crate::format::{format_optional_date, priority_class, task_status_class};
use crate::models::{Task, TaskStatus};
use crate::services;

/// What a rendered row depends on; rows whose key is unchanged are kept
pub fn row_key(task: &Task) -> (i64, TaskStatus, Option<String>, String) {
    (task.id, task.status, task.updated_at.clone(), task.title.clone())
}

#[component]
pub fn TaskRow(
    task: Task,
    can_edit: bool,
    can_delete: bool,
    flash: Flash,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_status: Callback<(i64, TaskStatus)>,
) -> impl IntoView {
    let id = task.id;
    let (has_note, set_has_note) = signal(false);
    let (note_open, set_note_open) = signal(false);
    let for_edit = StoredValue::new(task.clone());

    spawn_local(async move {
        if let Ok(exists) = services::note_exists(id).await {
            set_has_note.set(exists);
        }
    });

    let status = task.status;
    let assignee = task
        .assignee
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "Unassigned".to_string());
    let title = task.title.clone();

    view! {
        <div class="task-row">
            <div class="task-main">
                <div class="task-title-row">
                    <h4 class="task-title">{task.title.clone()}</h4>
                    <span class=task_status_class(task.status)>{task.status.label()}</span>
                    <span class=priority_class(task.priority)>{task.priority.as_str()}</span>
                    <Show when=move || has_note.get()>
                        <span class="badge badge-indigo">"Note"</span>
                    </Show>
                </div>
                {task.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                    <p class="task-description">{d}</p>
                })}
                <div class="task-meta">
                    <span>"Assignee: " {assignee}</span>
                    <span>"Due: " {format_optional_date(task.due_date.as_deref())}</span>
                </div>
            </div>

            <div class="task-actions">
                {can_edit.then(|| view! {
                    <TaskStatusSelect
                        compact=true
                        value=Signal::derive(move || status)
                        on_change=move |s: TaskStatus| on_status.run((id, s))
                    />
                    <button
                        type="button"
                        class="icon-btn"
                        title="Edit Task"
                        on:click=move |_| on_edit.run(for_edit.get_value())
                    >
                        "✎"
                    </button>
                })}
                {can_delete.then(|| view! {
                    <DeleteConfirmButton
                        button_class="icon-btn danger"
                        label="🗑"
                        prompt="Delete this task? This cannot be undone."
                        on_confirm=move |_| on_delete.run(id)
                    />
                })}
                <button
                    type="button"
                    class="icon-btn"
                    title="Notes"
                    on:click=move |_| set_note_open.update(|open| *open = !*open)
                >
                    {move || if note_open.get() { "Hide note" } else { "Note" }}
                </button>
            </div>

            <Show when=move || note_open.get()>
                <TaskNotePanel
                    task_id=id
                    task_title=title.clone()
                    flash=flash
                    on_changed=move |exists: bool| set_has_note.set(exists)
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(status: &str, updated_at: &str) -> Task {
        serde_json::from_value(json!({
            "id": 3, "title": "Ship", "status": status, "priority": "HIGH", "updatedAt": updated_at
        }))
        .unwrap()
    }

    #[test]
    fn test_row_key_stable_for_untouched_task() {
        let before = task("TODO", "2024-03-01T10:00:00");
        assert_eq!(row_key(&before), row_key(&before.clone()));
    }

    #[test]
    fn test_row_key_changes_when_task_changes() {
        let before = task("TODO", "2024-03-01T10:00:00");
        assert_ne!(row_key(&before), row_key(&task("IN_PROGRESS", "2024-03-01T10:00:00")));
        assert_ne!(row_key(&before), row_key(&task("TODO", "2024-03-02T09:00:00")));
    }
}

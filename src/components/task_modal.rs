//! Task Modal Component
//!
//! Create/edit dialog for a task inside a fixed project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{PrioritySelect, TaskStatusSelect};
use crate::forms::TaskForm;
use crate::models::{Priority, Project, Task, TaskStatus, User};
use crate::services;

/// People a task can be assigned to: owner first, then members, no repeats
pub fn assignable_users(project: &Project) -> Vec<User> {
    let mut users: Vec<User> = Vec::new();
    for user in project.owner.iter().chain(project.members.iter()) {
        if !users.iter().any(|u| u.id == user.id) {
            users.push(user.clone());
        }
    }
    users
}

#[component]
pub fn TaskModal(
    project: Project,
    /// Task being edited; `None` creates a new one
    task: Option<Task>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<Task>,
) -> impl IntoView {
    let editing_id = task.as_ref().map(|t| t.id);
    let is_edit = editing_id.is_some();
    let initial = match &task {
        Some(task) => TaskForm::from_task(task, project.id),
        None => TaskForm::for_project(project.id),
    };
    let form = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let people = assignable_users(&project);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => services::update_task(id, &request).await,
                None => services::create_task(&request).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    on_saved.run(saved);
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Failed to save task: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h2>{if is_edit { "Edit Task" } else { "Create Task" }}</h2>
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <p class="muted">"Project: " {project.name.clone()}</p>

                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

                <form class="modal-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            required
                            placeholder="What needs to be done?"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.title = value);
                            }
                        />
                    </label>

                    <label class="form-field">
                        <span>"Description"</span>
                        <textarea
                            rows="3"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        ></textarea>
                    </label>

                    <div class="form-row">
                        <label class="form-field">
                            <span>"Status"</span>
                            <TaskStatusSelect
                                value=Signal::derive(move || form.with(|f| f.status))
                                on_change=move |s: TaskStatus| form.update(|f| f.status = s)
                            />
                        </label>
                        <label class="form-field">
                            <span>"Priority"</span>
                            <PrioritySelect
                                value=Signal::derive(move || form.with(|f| f.priority))
                                on_change=move |p: Priority| form.update(|f| f.priority = p)
                            />
                        </label>
                    </div>

                    <div class="form-row">
                        <label class="form-field">
                            <span>"Due Date"</span>
                            <input
                                type="date"
                                prop:value=move || form.with(|f| f.due_date.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.due_date = value);
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span>"Assignee"</span>
                            <select
                                class="form-select"
                                on:change=move |ev| {
                                    let assignee = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| f.assignee_id = assignee);
                                }
                            >
                                <option value="" selected=move || form.with(|f| f.assignee_id.is_none())>
                                    "Unassigned"
                                </option>
                                {people.into_iter().map(|user| {
                                    let id = user.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form.with(|f| f.assignee_id == Some(id))
                                        >
                                            {user.display_name()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </label>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Save Changes"
                                } else {
                                    "Create Task"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignable_users_dedupes_owner() {
        let project: Project = serde_json::from_value(json!({
            "id": 1, "name": "P", "status": "ACTIVE", "priority": "LOW",
            "owner": {"id": 1, "firstName": "O", "lastName": "W", "email": "o@x.io"},
            "members": [
                {"id": 1, "firstName": "O", "lastName": "W", "email": "o@x.io"},
                {"id": 2, "firstName": "M", "lastName": "E", "email": "m@x.io"}
            ]
        }))
        .unwrap();
        let ids: Vec<i64> = assignable_users(&project).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

//! Project Detail Page
//!
//! One project with its members, documents and task list. Controls are
//! gated by the backend permission flags and by task ownership.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    row_key, DeleteConfirmButton, DocumentPicker, FlashBanner, ProjectModal, TaskModal, TaskRow,
};
use crate::config::AppConfig;
use crate::context::{use_app_context, Flash};
use crate::format::{
    format_date, format_optional_date, priority_class, progress_percentage,
    project_status_class,
};
use crate::forms::{oversized_message, split_by_size, StagedDocument};
use crate::models::{Project, Task, TaskSearch, TaskStatus};
use crate::permissions::{can_create_tasks, can_delete_task, can_edit_task};
use crate::route::Route;
use crate::services;
use crate::store::{store_remove_project, store_update_project, use_app_store, AppStateStoreFields};

/// Swap in a fresh copy of one task; false when it is no longer listed
pub fn replace_task(list: &mut [Task], updated: Task) -> bool {
    match list.iter_mut().find(|t| t.id == updated.id) {
        Some(task) => {
            *task = updated;
            true
        }
        None => false,
    }
}

/// Load tasks for `project_id` into `set_tasks`
async fn refresh_tasks(project_id: i64, set_tasks: WriteSignal<Vec<Task>>, flash: Flash) {
    match services::tasks(&TaskSearch::for_project(project_id)).await {
        Ok(page) => set_tasks.set(page.content),
        Err(e) => {
            log::error!("Failed to load tasks: {}", e);
            flash.show(format!("Failed to load tasks: {}", e));
        }
    }
}

#[component]
pub fn ProjectDetailPage(project_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = AppConfig::from_build_env();
    let max_bytes = config.max_document_bytes;
    let flash = Flash::new(config.flash_timeout_ms);

    let (project, set_project) = signal::<Option<Project>>(None);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (show_edit, set_show_edit) = signal(false);
    let (show_task_modal, set_show_task_modal) = signal(false);
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);
    let (uploading, set_uploading) = signal(false);

    let load = move || {
        spawn_local(async move {
            match services::project(project_id).await {
                Ok(loaded) => {
                    set_project.set(Some(loaded));
                    set_load_error.set(None);
                    refresh_tasks(project_id, set_tasks, flash).await;
                }
                Err(e) => {
                    log::error!("Failed to load project {}: {}", project_id, e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let on_delete_project = move |_: ()| {
        spawn_local(async move {
            match services::delete_project(project_id).await {
                Ok(()) => {
                    store_remove_project(&store, project_id);
                    ctx.navigate(Route::Projects);
                }
                Err(e) => {
                    log::error!("Failed to delete project: {}", e);
                    flash.show(format!("Failed to delete project: {}", e));
                }
            }
        });
    };

    let on_upload = move |documents: Vec<StagedDocument>| {
        let (accepted, rejected) = split_by_size(documents, max_bytes, StagedDocument::size, |d| d.name.clone());
        if !rejected.is_empty() {
            flash.show(oversized_message(&rejected, max_bytes));
        }
        if accepted.is_empty() {
            return;
        }
        set_uploading.set(true);
        spawn_local(async move {
            for document in &accepted {
                match services::upload_document(project_id, document).await {
                    Ok(updated) => set_project.set(Some(updated)),
                    Err(e) => {
                        log::error!("Failed to upload {}: {}", document.name, e);
                        flash.show(format!("Failed to upload document {}: {}", document.name, e));
                        break;
                    }
                }
            }
            set_uploading.set(false);
        });
    };

    let on_task_delete = move |task_id: i64| {
        spawn_local(async move {
            match services::delete_task(task_id).await {
                Ok(()) => set_tasks.update(|list| list.retain(|t| t.id != task_id)),
                Err(e) => {
                    log::error!("Failed to delete task: {}", e);
                    flash.show(format!("Failed to delete task: {}", e));
                }
            }
            refresh_tasks(project_id, set_tasks, flash).await;
        });
    };

    let on_task_status = move |(task_id, status): (i64, TaskStatus)| {
        spawn_local(async move {
            match services::update_task_status(task_id, status).await {
                Ok(updated) => set_tasks.update(|list| {
                    replace_task(list, updated);
                }),
                Err(e) => {
                    log::error!("Failed to update task status: {}", e);
                    flash.show(format!("Failed to update task status: {}", e));
                    // Put the row back to what the backend has
                    match services::task(task_id).await {
                        Ok(fresh) => set_tasks.update(|list| {
                            replace_task(list, fresh);
                        }),
                        Err(e) => {
                            log::warn!("Failed to reload task {}: {}", task_id, e);
                            refresh_tasks(project_id, set_tasks, flash).await;
                        }
                    }
                }
            }
        });
    };

    let open_task_modal = move |task: Option<Task>| {
        set_editing_task.set(task);
        set_show_task_modal.set(true);
    };

    view! {
        <div class="page">
            <div class="page-header">
                <button
                    type="button"
                    class="secondary-btn"
                    aria-label="Back to Projects"
                    on:click=move |_| ctx.navigate(Route::Projects)
                >
                    "← Back to Projects"
                </button>
            </div>

            <FlashBanner flash=flash />

            {move || {
                if loading.get() && project.with(|p| p.is_none()) {
                    return view! { <div class="loading">"Loading project..."</div> }.into_any();
                }
                let Some(current) = project.get() else {
                    let message = load_error.get().unwrap_or_else(|| "Project not found".to_string());
                    return view! {
                        <div class="empty-state">
                            <h3>"Could not load project"</h3>
                            <p class="muted">{message}</p>
                        </div>
                    }
                    .into_any();
                };

                let progress = progress_percentage(current.completed_tasks, current.total_tasks);
                let owner = current
                    .owner
                    .as_ref()
                    .map(|u| u.display_name())
                    .unwrap_or_else(|| "—".to_string());
                let can_edit = current.can_edit;
                let can_delete = current.can_delete;
                let can_create = can_create_tasks(&current);

                view! {
                    <section class="project-header">
                        <div class="project-title-row">
                            <h1>{current.name.clone()}</h1>
                            <span class=project_status_class(current.status)>{current.status.label()}</span>
                            <span class=priority_class(current.priority)>{current.priority.as_str()}</span>
                            {current.current_user_role.clone().map(|role| view! {
                                <span class="badge badge-gray">{role}</span>
                            })}
                        </div>
                        <div class="project-actions">
                            {can_edit.then(|| view! {
                                <button type="button" class="secondary-btn" on:click=move |_| set_show_edit.set(true)>
                                    "Edit"
                                </button>
                            })}
                            {can_delete.then(|| view! {
                                <DeleteConfirmButton
                                    button_class="danger-btn"
                                    label="Delete"
                                    prompt="Delete this project? This cannot be undone."
                                    on_confirm=on_delete_project
                                />
                            })}
                        </div>
                    </section>

                    {current.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                        <p class="project-description">{d}</p>
                    })}

                    <section class="project-progress">
                        <div class="progress-label">
                            <span>"Progress"</span>
                            <span>{format!("{}%", progress)}</span>
                        </div>
                        <div class="progress-bar">
                            <div class="progress-fill" style=format!("width: {}%", progress)></div>
                        </div>
                        <p class="muted">
                            {format!("{} of {} tasks completed", current.completed_tasks, current.total_tasks)}
                        </p>
                    </section>

                    <section class="project-meta">
                        <div><span class="muted">"Owner"</span> <span>{owner}</span></div>
                        <div><span class="muted">"Created"</span> <span>{format_date(&current.created_at)}</span></div>
                        <div>
                            <span class="muted">"Updated"</span>
                            <span>{format_optional_date(current.updated_at.as_deref())}</span>
                        </div>
                        <div>
                            <span class="muted">"Deadline"</span>
                            <span>{format_optional_date(current.deadline.as_deref())}</span>
                        </div>
                    </section>

                    <div class="detail-columns">
                        <section class="project-members">
                            <h2>{format!("Team Members ({})", current.members.len())}</h2>
                            {if current.members.is_empty() {
                                view! { <p class="muted">"No members yet"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="member-list">
                                        {current.members.iter().map(|member| view! {
                                            <li class="member-item">
                                                <span class="avatar">{member.initial()}</span>
                                                <div>
                                                    <div>{member.display_name()}</div>
                                                    <div class="muted">{member.email.clone()}</div>
                                                </div>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                        </section>

                        <section class="project-documents">
                            <h2>{format!("Documents ({})", current.documents.len())}</h2>
                            {if current.documents.is_empty() {
                                view! { <p class="muted">"No documents uploaded"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="document-list">
                                        {current.documents.iter().map(|doc| view! {
                                            <li class="document-item">
                                                <a href=doc.url.clone() target="_blank" rel="noopener noreferrer">
                                                    {doc.name.clone()}
                                                </a>
                                                <span class="muted">{format_optional_date(doc.created_at.as_deref())}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                            {can_edit.then(|| view! {
                                <DocumentPicker
                                    max_bytes=max_bytes
                                    label="Upload documents".to_string()
                                    on_files=on_upload
                                    on_error=move |message: String| flash.show(message)
                                />
                                <Show when=move || uploading.get()>
                                    <span class="muted">"Uploading..."</span>
                                </Show>
                            })}
                        </section>
                    </div>

                    <section class="project-tasks">
                        <div class="section-header">
                            <h2>{move || format!("Tasks ({})", tasks.with(|t| t.len()))}</h2>
                            {can_create.then(|| view! {
                                <button type="button" class="primary-btn" on:click=move |_| open_task_modal(None)>
                                    "+ New Task"
                                </button>
                            })}
                        </div>
                        <Show
                            when=move || tasks.with(|t| !t.is_empty())
                            fallback=|| view! { <p class="muted">"No tasks yet"</p> }
                        >
                            <div class="task-list">
                                <For
                                    each=move || {
                                        let user_id = store.current_user().with(|u| u.as_ref().map(|u| u.id));
                                        tasks.get().into_iter().map(move |t| (user_id, t)).collect::<Vec<_>>()
                                    }
                                    key=|(user_id, task): &(Option<i64>, Task)| (*user_id, row_key(task))
                                    children=move |(_, task): (Option<i64>, Task)| {
                                        let user = store.current_user().get_untracked();
                                        let (edit, delete) = match project.get_untracked() {
                                            Some(p) => (
                                                can_edit_task(&p, &task, user.as_ref()),
                                                can_delete_task(&p, &task, user.as_ref()),
                                            ),
                                            None => (false, false),
                                        };
                                        view! {
                                            <TaskRow
                                                task=task
                                                can_edit=edit
                                                can_delete=delete
                                                flash=flash
                                                on_edit=move |t: Task| open_task_modal(Some(t))
                                                on_delete=on_task_delete
                                                on_status=on_task_status
                                            />
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </section>
                }
                .into_any()
            }}

            {move || {
                if !show_edit.get() {
                    return None;
                }
                project.get_untracked().map(|current| view! {
                    <ProjectModal
                        project=Some(current)
                        on_close=move |_| set_show_edit.set(false)
                        on_saved=move |saved: Project| {
                            store_update_project(&store, saved.clone());
                            set_project.set(Some(saved));
                        }
                    />
                })
            }}

            {move || {
                if !show_task_modal.get() {
                    return None;
                }
                project.get_untracked().map(|current| view! {
                    <TaskModal
                        project=current
                        task=editing_task.get_untracked()
                        on_close=move |_| {
                            set_show_task_modal.set(false);
                            set_editing_task.set(None);
                        }
                        on_saved=move |_| load()
                    />
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(id: i64, status: &str) -> Task {
        serde_json::from_value(json!({"id": id, "title": "T", "status": status, "priority": "LOW"})).unwrap()
    }

    #[test]
    fn test_replace_task_swaps_matching_row_only() {
        let mut list = vec![task(1, "TODO"), task(2, "TODO")];
        assert!(replace_task(&mut list, task(2, "COMPLETED")));
        assert_eq!(list[0].status, TaskStatus::Todo);
        assert_eq!(list[1].status, TaskStatus::Completed);
    }

    #[test]
    fn test_replace_task_ignores_unlisted_task() {
        let mut list = vec![task(1, "TODO")];
        assert!(!replace_task(&mut list, task(9, "COMPLETED")));
        assert_eq!(list, vec![task(1, "TODO")]);
    }
}

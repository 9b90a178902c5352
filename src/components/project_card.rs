//! Project Card Component
//!
//! Summary tile on the projects page with an owner-only action menu.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::format::{format_date, priority_class, progress_percentage, project_status_class};
use crate::models::Project;

#[component]
pub fn ProjectCard(
    project: Project,
    /// Edit/Delete are only offered to the owner
    is_owner: bool,
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] on_toggle_menu: Callback<()>,
    #[prop(into)] on_edit: Callback<Project>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_view: Callback<i64>,
) -> impl IntoView {
    let id = project.id;
    let percent = progress_percentage(project.completed_tasks, project.total_tasks);
    let for_edit = StoredValue::new(project.clone());

    view! {
        <div class="project-card">
            <div class="project-card-header">
                <div class="project-card-title">
                    <h3>{project.name.clone()}</h3>
                    <div class="badge-row">
                        <span class=project_status_class(project.status)>{project.status.as_str()}</span>
                        <span class=priority_class(project.priority)>{project.priority.as_str()}</span>
                    </div>
                </div>

                <div class="menu-anchor">
                    <button type="button" class="menu-btn" on:click=move |_| on_toggle_menu.run(())>"⋮"</button>
                    <Show when=move || menu_open.get()>
                        <div class="dropdown-menu">
                            {is_owner.then(|| view! {
                                <button
                                    type="button"
                                    class="dropdown-item"
                                    on:click=move |_| on_edit.run(for_edit.get_value())
                                >
                                    "Edit Project"
                                </button>
                                <DeleteConfirmButton
                                    button_class="dropdown-item danger"
                                    label="Delete Project"
                                    prompt="Are you sure you want to delete this project? This action cannot be undone."
                                    on_confirm=move |_| on_delete.run(id)
                                />
                            })}
                        </div>
                    </Show>
                </div>
            </div>

            {project.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="project-card-description">{d}</p>
            })}

            <div class="project-card-stats">
                <div class="stat">
                    <span class="stat-value">{project.members.len()}</span>
                    <span class="stat-label">"Members"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{project.documents.len()}</span>
                    <span class="stat-label">"Documents"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{project.total_tasks}</span>
                    <span class="stat-label">"Tasks"</span>
                </div>
            </div>

            <div class="progress">
                <div class="progress-header">
                    <span>"Progress"</span>
                    <span>{format!("{}/{} tasks", project.completed_tasks, project.total_tasks)}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar" style=format!("width: {}%", percent)></div>
                </div>
                <p class="progress-caption">{format!("{}% complete", percent)}</p>
            </div>

            <div class="project-card-footer">
                <div class="project-card-dates">
                    <span>"Created " {format_date(&project.created_at)}</span>
                    {project.deadline.as_deref().map(|d| view! {
                        <span class="deadline">"Due " {format_date(d)}</span>
                    })}
                </div>
                <button
                    type="button"
                    class="primary-btn small"
                    aria-label=format!("View project {}", project.name)
                    on:click=move |_| on_view.run(id)
                >
                    "View Project"
                </button>
            </div>
        </div>
    }
}

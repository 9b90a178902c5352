//! Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::LogPanel;
use crate::context::use_app_context;
use crate::models::{DashboardStats, TaskStats};
use crate::route::Route;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn StatCard(label: &'static str, value: Signal<u64>, #[prop(optional)] accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", accent)>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (project_stats, set_project_stats) = signal(DashboardStats::default());
    let (task_stats, set_task_stats) = signal(TaskStats::default());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match services::project_stats().await {
            Ok(stats) => set_project_stats.set(stats),
            Err(e) => {
                log::error!("Failed to load project stats: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        match services::task_stats().await {
            Ok(stats) => set_task_stats.set(stats),
            Err(e) => log::error!("Failed to load task stats: {}", e),
        }
    });

    let on_logout = move |_| {
        services::logout();
        store.current_user().set(None);
        ctx.navigate(Route::Login);
    };

    let greeting = move || {
        store
            .current_user()
            .get()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="muted">{greeting}</p>
                </div>
                <div class="page-header-actions">
                    <button type="button" class="primary-btn" on:click=move |_| ctx.navigate(Route::Projects)>
                        "View Projects"
                    </button>
                    <button type="button" class="secondary-btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <h2>"Projects"</h2>
            <div class="stat-grid">
                <StatCard label="Total Projects" value=Signal::derive(move || project_stats.get().total_projects) />
                <StatCard
                    label="Completed Tasks"
                    accent="stat-green"
                    value=Signal::derive(move || project_stats.get().completed_tasks)
                />
                <StatCard
                    label="In Progress"
                    accent="stat-blue"
                    value=Signal::derive(move || project_stats.get().in_progress_tasks)
                />
            </div>

            <h2>"Tasks"</h2>
            <div class="stat-grid">
                <StatCard label="Total" value=Signal::derive(move || task_stats.get().total_tasks) />
                <StatCard label="To Do" value=Signal::derive(move || task_stats.get().todo_tasks) />
                <StatCard
                    label="In Progress"
                    accent="stat-blue"
                    value=Signal::derive(move || task_stats.get().in_progress_tasks)
                />
                <StatCard
                    label="Completed"
                    accent="stat-green"
                    value=Signal::derive(move || task_stats.get().completed_tasks)
                />
                <StatCard
                    label="Overdue"
                    accent="stat-red"
                    value=Signal::derive(move || task_stats.get().overdue_tasks)
                />
            </div>

            <LogPanel />
        </div>
    }
}

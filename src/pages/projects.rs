//! Projects Page
//!
//! Lists the user's projects with debounced search, status/priority
//! filters and the create/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FlashBanner, ProjectCard, ProjectModal};
use crate::config::AppConfig;
use crate::context::{use_app_context, Flash};
use crate::debounce::{debounce, LatestGate, Ticket};
use crate::error::ApiError;
use crate::filter::{parse_choice, ProjectFilter};
use crate::models::{Priority, Project, ProjectStatus};
use crate::permissions::is_owner;
use crate::route::Route;
use crate::services;
use crate::session;
use crate::store::{store_remove_project, use_app_store, AppStateStoreFields, AppStore};

/// Reload the list; a non-blank query goes through backend search
async fn refresh_projects(store: AppStore, query: String, ticket: Ticket) {
    store.projects_loading().set(true);
    let query = query.trim().to_string();
    let result = if query.is_empty() {
        services::user_projects().await
    } else {
        services::search_projects(&query).await
    };
    if !ticket.is_current() {
        return;
    }
    match result {
        Ok(projects) => store.projects().set(projects),
        Err(ApiError::Unauthorized) => {}
        Err(ApiError::MissingToken) => {
            log::error!("No authentication token found");
            session::redirect_to_login();
        }
        Err(e) if query.is_empty() => {
            log::error!("Failed to load projects: {}", e);
            store.projects().set(Vec::new());
        }
        Err(e) => log::error!("Failed to search projects: {}", e),
    }
    store.projects_loading().set(false);
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = AppConfig::from_build_env();
    let delay_ms = config.search_debounce_ms;
    let flash = Flash::new(config.flash_timeout_ms);
    let gate = StoredValue::new(LatestGate::new());

    let (filter, set_filter) = signal(ProjectFilter::default());
    let (show_modal, set_show_modal) = signal(false);
    let (selected, set_selected) = signal::<Option<Project>>(None);
    let (open_menu, set_open_menu) = signal::<Option<i64>>(None);

    let reload = move || spawn_local(refresh_projects(store, String::new(), gate.get_value().arm()));

    if session::has_token() {
        reload();
    } else {
        log::error!("No authentication token found");
        session::redirect_to_login();
    }

    let on_search = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        set_filter.update(|f| f.query = query.clone());
        debounce(&gate.get_value(), delay_ms, move |ticket| refresh_projects(store, query, ticket));
    };

    let open_create = move || {
        set_selected.set(None);
        set_show_modal.set(true);
    };

    let on_edit = move |project: Project| {
        set_selected.set(Some(project));
        set_show_modal.set(true);
        set_open_menu.set(None);
    };

    let on_delete = move |project_id: i64| {
        set_open_menu.set(None);
        // Drop the card right away, then resync with the backend
        store_remove_project(&store, project_id);
        spawn_local(async move {
            if let Err(e) = services::delete_project(project_id).await {
                log::error!("Failed to delete project: {}", e);
                flash.show(format!("Failed to delete project: {}", e));
            }
            refresh_projects(store, String::new(), gate.get_value().arm()).await;
        });
    };

    let visible = move || filter.with(|f| f.apply(&store.projects().get()));

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header-left">
                    <button
                        type="button"
                        class="secondary-btn"
                        aria-label="Back to Dashboard"
                        on:click=move |_| ctx.navigate(Route::Dashboard)
                    >
                        "← Back to Dashboard"
                    </button>
                    <div>
                        <h1>"Projects"</h1>
                        <p class="muted">"Manage and track your project portfolio"</p>
                    </div>
                </div>
                <button type="button" class="primary-btn" on:click=move |_| open_create()>
                    "+ New Project"
                </button>
            </div>

            <FlashBanner flash=flash />

            <div class="filters">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search projects..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=on_search
                />
                <select
                    class="form-select"
                    on:change=move |ev| {
                        let status = parse_choice::<ProjectStatus>(&event_target_value(&ev));
                        set_filter.update(|f| f.status = status);
                    }
                >
                    <option value="all">"All Status"</option>
                    {ProjectStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="form-select"
                    on:change=move |ev| {
                        let priority = parse_choice::<Priority>(&event_target_value(&ev));
                        set_filter.update(|f| f.priority = priority);
                    }
                >
                    <option value="all">"All Priority"</option>
                    {Priority::ALL.iter().map(|p| view! {
                        <option value=p.as_str()>{p.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                if store.projects_loading().get() && store.projects().with(|p| p.is_empty()) {
                    return view! {
                        <div class="card-grid skeleton">
                            {(0..6).map(|_| view! { <div class="skeleton-card"></div> }).collect_view()}
                        </div>
                    }.into_any();
                }

                let projects = visible();
                if projects.is_empty() {
                    let filtered = filter.with(|f| f.is_active());
                    return view! {
                        <div class="empty-state">
                            <h3>"No projects found"</h3>
                            <p class="muted">
                                {if filtered {
                                    "No projects match your search criteria."
                                } else {
                                    "Get started by creating your first project."
                                }}
                            </p>
                            {(!filtered).then(|| view! {
                                <button type="button" class="primary-btn" on:click=move |_| open_create()>
                                    "Create Project"
                                </button>
                            })}
                        </div>
                    }.into_any();
                }

                let user = store.current_user().get();
                view! {
                    <div class="card-grid">
                        {projects.into_iter().map(|project| {
                            let id = project.id;
                            let owner = is_owner(&project, user.as_ref());
                            view! {
                                <ProjectCard
                                    project=project
                                    is_owner=owner
                                    menu_open=Signal::derive(move || open_menu.get() == Some(id))
                                    on_toggle_menu=move |_| set_open_menu.update(|m| {
                                        *m = if *m == Some(id) { None } else { Some(id) };
                                    })
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_view=move |id: i64| ctx.navigate(Route::ProjectDetail(id))
                                />
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            <Show when=move || show_modal.get()>
                <ProjectModal
                    project=selected.get_untracked()
                    on_close=move |_| {
                        set_show_modal.set(false);
                        set_selected.set(None);
                    }
                    on_saved=move |_| reload()
                />
            </Show>
        </div>
    }
}

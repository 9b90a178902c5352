//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Project, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, loaded from `/auth/me`
    pub current_user: Option<User>,
    /// Projects shown on the list page
    pub projects: Vec<Project>,
    /// True while the list page is fetching
    pub projects_loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a project in the store by ID
pub fn store_update_project(store: &AppStore, updated: Project) {
    if let Some(project) = store.projects().write().iter_mut().find(|p| p.id == updated.id) {
        *project = updated;
    }
}

/// Remove a project from the store by ID
pub fn store_remove_project(store: &AppStore, project_id: i64) {
    store.projects().write().retain(|p| p.id != project_id);
}

//! TaskSphere Frontend App
//!
//! Root component: provides the store and navigation context, then picks
//! the page for the current route.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::{use_app_context, AppContext};
use crate::pages::{DashboardPage, LoginPage, ProjectDetailPage, ProjectsPage};
use crate::route::{self, Route};
use crate::services;
use crate::session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
fn NotFound(path: String) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="page empty-state">
            <h1>"Page not found"</h1>
            <p class="muted">{format!("Nothing lives at {}", path)}</p>
            <button type="button" class="primary-btn" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "Go to Dashboard"
            </button>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(signal(route::current()));
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());

    // Pages behind the session need a token
    Effect::new(move |_| {
        let current = ctx.route.get();
        if !current.is_public() && !session::has_token() {
            log::info!("no session, redirecting {} to login", current.path());
            ctx.navigate(Route::Login);
        }
    });

    // Who is logged in; refetched whenever the token appears
    Effect::new(move |_| {
        let current = ctx.route.get();
        if current.is_public() || !session::has_token() || store.current_user().with_untracked(|u| u.is_some()) {
            return;
        }
        spawn_local(async move {
            match services::current_user().await {
                Ok(user) => store.current_user().set(Some(user)),
                Err(e) => log::warn!("Failed to load current user: {}", e),
            }
        });
    });

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::ResetPassword { token } => view! { <LoginPage reset_token=token /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                Route::Projects => view! { <ProjectsPage /> }.into_any(),
                Route::ProjectDetail(id) => view! { <ProjectDetailPage project_id=id /> }.into_any(),
                Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
            }}
        </div>
    }
}

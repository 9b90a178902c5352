//! User Search Component
//!
//! Debounced team-member search with click-to-add suggestions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::context::Flash;
use crate::debounce::{debounce, LatestGate, Ticket};
use crate::models::User;
use crate::services;

const SEARCH_FAILED: &str = "Failed to search for team members. Please try again.";

/// Users not already picked, in backend order
pub fn unpicked(results: &[User], picked: &[String]) -> Vec<User> {
    results
        .iter()
        .filter(|u| !picked.contains(&u.email))
        .cloned()
        .collect()
}

async fn fetch_users(
    query: String,
    ticket: Ticket,
    set_results: WriteSignal<Vec<User>>,
    set_loading: WriteSignal<bool>,
    flash: Flash,
) {
    set_loading.set(true);
    let outcome = services::search_users(query.trim()).await;
    if !ticket.is_current() {
        log::debug!("dropping stale user search for {:?}", query);
        return;
    }
    match outcome {
        Ok(users) => {
            set_results.set(users);
            flash.clear();
        }
        Err(e) => {
            log::error!("Failed to search users: {}", e);
            set_results.set(Vec::new());
            flash.show(SEARCH_FAILED);
        }
    }
    set_loading.set(false);
}

/// Member search box
///
/// Props:
/// - picked: emails already chosen, hidden from suggestions
/// - on_select: called with the email of a clicked suggestion
#[component]
pub fn UserSearch(
    #[prop(into)] picked: Signal<Vec<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let config = AppConfig::from_build_env();
    let delay_ms = config.search_debounce_ms;
    let (search_term, set_search_term) = signal(String::new());
    let (results, set_results) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(false);
    let flash = Flash::new(config.flash_timeout_ms);
    let gate = StoredValue::new(LatestGate::new());

    // Load all users when the search box appears
    spawn_local(fetch_users(String::new(), gate.get_value().arm(), set_results, set_loading, flash));

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_term.set(value.clone());
        debounce(&gate.get_value(), delay_ms, move |ticket| {
            fetch_users(value, ticket, set_results, set_loading, flash)
        });
    };

    view! {
        <div class="user-search">
            <div class="user-search-input">
                <input
                    type="text"
                    autocomplete="off"
                    placeholder="Search by email or name..."
                    prop:value=move || search_term.get()
                    on:input=on_input
                />
                <Show when=move || loading.get()>
                    <span class="spinner" aria-label="Searching"></span>
                </Show>
            </div>

            {move || flash.message().map(|text| view! { <p class="field-error">{text}</p> })}

            {move || {
                let visible = picked.with(|p| unpicked(&results.get(), p));
                (!visible.is_empty()).then(|| view! {
                    <div class="autocomplete-list">
                        {visible.into_iter().map(|user| {
                            let email = user.email.clone();
                            view! {
                                <button
                                    type="button"
                                    class="autocomplete-item"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_select.run(email.clone());
                                        set_search_term.set(String::new());
                                    }
                                >
                                    <span class="avatar">{user.initial()}</span>
                                    <span class="autocomplete-name">{user.display_name()}</span>
                                    <span class="autocomplete-email">{user.email.clone()}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, email: &str) -> User {
        User { id, first_name: "F".into(), last_name: "L".into(), email: email.into() }
    }

    #[test]
    fn test_picked_users_are_hidden() {
        let results = vec![user(1, "a@x.io"), user(2, "b@x.io"), user(3, "c@x.io")];
        let visible = unpicked(&results, &["b@x.io".to_string()]);
        let emails: Vec<&str> = visible.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.io", "c@x.io"]);
    }
}

//! Selector Components
//!
//! `<select>` inputs for priority and task status.

use leptos::prelude::*;

use crate::models::{Priority, TaskStatus};

#[component]
pub fn PrioritySelect(
    #[prop(into)] value: Signal<Priority>,
    #[prop(into)] on_change: Callback<Priority>,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                if let Ok(priority) = event_target_value(&ev).parse::<Priority>() {
                    on_change.run(priority);
                }
            }
        >
            {Priority::ALL.iter().map(|p| {
                let p = *p;
                view! {
                    <option value=p.as_str() selected=move || value.get() == p>{p.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn TaskStatusSelect(
    #[prop(into)] value: Signal<TaskStatus>,
    #[prop(into)] on_change: Callback<TaskStatus>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <select
            class=if compact { "form-select small" } else { "form-select" }
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                if let Ok(status) = event_target_value(&ev).parse::<TaskStatus>() {
                    on_change.run(status);
                }
            }
        >
            {TaskStatus::ALL.iter().map(|s| {
                let s = *s;
                view! {
                    <option value=s.as_str() selected=move || value.get() == s>{s.label()}</option>
                }
            }).collect_view()}
        </select>
    }
}

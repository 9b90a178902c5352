//! Flash Banner Component

use leptos::prelude::*;

use crate::context::Flash;

/// Renders the flash message while it is set
#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    move || {
        flash.message().map(|text| {
            view! {
                <div class="flash-message" role="alert">
                    <span>{text}</span>
                    <button type="button" class="close-btn" on:click=move |_| flash.clear()>"×"</button>
                </div>
            }
        })
    }
}

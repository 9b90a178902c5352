//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

/// Two-step delete: the first press only asks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

impl ConfirmStep {
    pub fn request(self) -> Self {
        ConfirmStep::Asking
    }

    /// Returns the next step and whether the delete may run
    pub fn confirm(self) -> (Self, bool) {
        match self {
            ConfirmStep::Asking => (ConfirmStep::Idle, true),
            ConfirmStep::Idle => (ConfirmStep::Idle, false),
        }
    }

    pub fn cancel(self) -> Self {
        ConfirmStep::Idle
    }
}

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while confirming
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Delete? This cannot be undone.".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(ConfirmStep::Idle);

    view! {
        <Show when=move || step.get() == ConfirmStep::Idle>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_step.update(|s| *s = s.request());
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || step.get() == ConfirmStep::Asking>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, fire) = step.get_untracked().confirm();
                        set_step.set(next);
                        if fire {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_step.update(|s| *s = s.cancel());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_without_asking_does_not_fire() {
        let (next, fire) = ConfirmStep::Idle.confirm();
        assert_eq!(next, ConfirmStep::Idle);
        assert!(!fire);
    }

    #[test]
    fn test_request_then_confirm_fires_once() {
        let step = ConfirmStep::default().request();
        assert_eq!(step, ConfirmStep::Asking);
        let (step, fire) = step.confirm();
        assert!(fire);
        let (_, again) = step.confirm();
        assert!(!again);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let (_, fire) = ConfirmStep::Idle.request().cancel().confirm();
        assert!(!fire);
    }
}

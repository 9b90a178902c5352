//! Login Page
//!
//! Sign in, sign up and password recovery share one card; `mode` picks
//! which form is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest};
use crate::route::Route;
use crate::services;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
    Forgot,
    Reset,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to TaskSphere",
            AuthMode::Signup => "Create your account",
            AuthMode::Forgot => "Reset your password",
            AuthMode::Reset => "Choose a new password",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Sign Up",
            AuthMode::Forgot => "Send Reset Link",
            AuthMode::Reset => "Update Password",
        }
    }
}

/// Fields of the auth card, validated per mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthFields {
    pub fn validate(&self, mode: AuthMode) -> Result<(), String> {
        let needs_email = matches!(mode, AuthMode::Login | AuthMode::Signup | AuthMode::Forgot);
        if needs_email && self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if mode != AuthMode::Forgot && self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        if mode == AuthMode::Signup && self.first_name.trim().is_empty() {
            return Err("First name is required".to_string());
        }
        if matches!(mode, AuthMode::Signup | AuthMode::Reset) && self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

#[component]
pub fn LoginPage(
    /// Token from a reset link; opens the card in reset mode
    #[prop(optional)]
    reset_token: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial_mode = if reset_token.is_some() { AuthMode::Reset } else { AuthMode::Login };
    let reset_token = StoredValue::new(reset_token.unwrap_or_default());
    let (mode, set_mode) = signal(initial_mode);
    let fields = RwSignal::new(AuthFields::default());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let switch_to = move |next: AuthMode| {
        set_error.set(None);
        set_notice.set(None);
        set_mode.set(next);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = mode.get_untracked();
        let values = fields.get_untracked();
        if let Err(message) = values.validate(current) {
            set_error.set(Some(message));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        set_notice.set(None);

        spawn_local(async move {
            let outcome = match current {
                AuthMode::Login => {
                    let request = LoginRequest {
                        email: values.email.trim().to_string(),
                        password: values.password.clone(),
                    };
                    match services::login(&request).await {
                        Ok(auth) => {
                            let user = match auth.user {
                                Some(user) => Some(user),
                                None => services::current_user().await.ok(),
                            };
                            store.current_user().set(user);
                            ctx.navigate(Route::Dashboard);
                            Ok(None)
                        }
                        Err(e) => Err(e),
                    }
                }
                AuthMode::Signup => {
                    let request = SignupRequest {
                        first_name: values.first_name.trim().to_string(),
                        last_name: values.last_name.trim().to_string(),
                        email: values.email.trim().to_string(),
                        password: values.password.clone(),
                    };
                    services::signup(&request)
                        .await
                        .map(|_| Some("Account created. You can sign in now.".to_string()))
                }
                AuthMode::Forgot => {
                    let request = ForgotPasswordRequest { email: values.email.trim().to_string() };
                    services::forgot_password(&request)
                        .await
                        .map(|_| Some("If the email exists, a reset link has been sent.".to_string()))
                }
                AuthMode::Reset => {
                    let request = ResetPasswordRequest {
                        token: reset_token.get_value(),
                        new_password: values.password.clone(),
                    };
                    services::reset_password(&request)
                        .await
                        .map(|_| Some("Password updated. Please sign in.".to_string()))
                }
            };
            set_busy.set(false);

            match outcome {
                Ok(Some(message)) => {
                    if matches!(current, AuthMode::Signup | AuthMode::Reset) {
                        set_mode.set(AuthMode::Login);
                        fields.update(|f| {
                            f.password.clear();
                            f.confirm_password.clear();
                        });
                    }
                    set_notice.set(Some(message));
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Auth request failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, get: fn(&AuthFields) -> String, set: fn(&mut AuthFields, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || fields.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || mode.get().title()}</h1>

                {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                {move || notice.get().map(|n| view! { <div class="form-notice">{n}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <div class="form-row">
                            {text_field("First Name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                            {text_field("Last Name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                        </div>
                    </Show>

                    <Show when=move || mode.get() != AuthMode::Reset>
                        {text_field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    </Show>

                    <Show when=move || mode.get() != AuthMode::Forgot>
                        {text_field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    </Show>

                    <Show when=move || matches!(mode.get(), AuthMode::Signup | AuthMode::Reset)>
                        {text_field(
                            "Confirm Password",
                            "password",
                            |f| f.confirm_password.clone(),
                            |f, v| f.confirm_password = v,
                        )}
                    </Show>

                    <button type="submit" class="primary-btn" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <div class="auth-links">
                    {move || match mode.get() {
                        AuthMode::Login => view! {
                            <button type="button" class="link-btn" on:click=move |_| switch_to(AuthMode::Signup)>
                                "Create an account"
                            </button>
                            <button type="button" class="link-btn" on:click=move |_| switch_to(AuthMode::Forgot)>
                                "Forgot password?"
                            </button>
                        }.into_any(),
                        _ => view! {
                            <button type="button" class="link-btn" on:click=move |_| switch_to(AuthMode::Login)>
                                "Back to sign in"
                            </button>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AuthFields {
        AuthFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }
    }

    #[test]
    fn test_login_needs_email_and_password() {
        let mut fields = filled();
        assert!(fields.validate(AuthMode::Login).is_ok());
        fields.email = "  ".into();
        assert_eq!(fields.validate(AuthMode::Login), Err("Email is required".to_string()));
        fields.email = "ada@example.com".into();
        fields.password.clear();
        assert_eq!(fields.validate(AuthMode::Login), Err("Password is required".to_string()));
    }

    #[test]
    fn test_forgot_only_needs_email() {
        let fields = AuthFields { email: "ada@example.com".into(), ..Default::default() };
        assert!(fields.validate(AuthMode::Forgot).is_ok());
    }

    #[test]
    fn test_signup_and_reset_check_confirmation() {
        let mut fields = filled();
        fields.confirm_password = "other".into();
        assert_eq!(fields.validate(AuthMode::Signup), Err("Passwords do not match".to_string()));
        assert_eq!(fields.validate(AuthMode::Reset), Err("Passwords do not match".to_string()));
        assert!(fields.validate(AuthMode::Login).is_ok());
    }

    #[test]
    fn test_signup_needs_first_name() {
        let fields = AuthFields { first_name: String::new(), ..filled() };
        assert_eq!(fields.validate(AuthMode::Signup), Err("First name is required".to_string()));
    }
}

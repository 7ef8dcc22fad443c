//! Login form component
//!
//! Email and password sign-in with an optional remembered email.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{BrowserStorage, use_auth_context};
use crate::core::forms::validate_login;
use crate::core::session;
use crate::ui::common::{CheckboxField, ErrorMessage, LoadingLabel, TextField};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to register form
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    // Storage is only readable after hydration.
    Effect::new(move |_| {
        if let Some(saved) = session::remembered_email(&BrowserStorage) {
            email.set(saved);
            remember.set(true);
        }
    });

    // Local validation errors win over the last server error
    let shown_error = Signal::derive(move || form_error.get().or_else(|| auth.error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if let Err(message) = validate_login(&email_val, &password_val) {
            form_error.set(Some(message));
            return;
        }
        form_error.set(None);

        let keep_email = remember.get_untracked();
        spawn_local(async move {
            if auth.login(&email_val, &password_val).await.is_ok() {
                let remembered = keep_email.then(|| email_val.trim().to_string());
                session::remember_email(&BrowserStorage, remembered.as_deref());
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="auth-header">
                <h2>"Welcome Back"</h2>
                <p class="muted">"Sign in to continue designing with VastraVaani"</p>
            </div>

            <ErrorMessage error=shown_error/>

            <TextField
                label="Email"
                value=email
                input_type="email"
                placeholder="you@example.com"
                required=true
            />
            <TextField
                label="Password"
                value=password
                input_type="password"
                placeholder="Enter your password"
                required=true
            />

            <div class="auth-row">
                <CheckboxField label="Remember me" checked=remember/>
            </div>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || auth.loading.get()
            >
                <LoadingLabel loading=auth.loading idle="Sign In" busy="Signing in..."/>
            </button>

            <p class="auth-switch">
                "Don't have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        auth.clear_error();
                        if let Some(callback) = on_register_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign up"
                </button>
            </p>
        </form>
    }
}

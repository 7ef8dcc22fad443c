//! Register form component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::forms::{self, validate_register};
use crate::ui::common::{CheckboxField, ErrorMessage, LoadingLabel, TextField};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let shown_error = Signal::derive(move || form_error.get().or_else(|| auth.error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let form = forms::RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        };
        if let Err(message) = validate_register(&form) {
            form_error.set(Some(message));
            return;
        }
        form_error.set(None);

        spawn_local(async move {
            if auth
                .register(&form.email, &form.password, &form.name)
                .await
                .is_ok()
                && let Some(callback) = on_success
            {
                callback.run(());
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <div class="auth-header">
                <h2>"Create Account"</h2>
                <p class="muted">"Join VastraVaani and start designing"</p>
            </div>

            <ErrorMessage error=shown_error/>

            <TextField label="Full Name" value=name placeholder="Your name" required=true/>
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
                placeholder="At least 6 characters"
                required=true
            />
            <TextField
                label="Confirm Password"
                value=confirm_password
                input_type="password"
                placeholder="Repeat your password"
                required=true
            />

            <CheckboxField label="I agree to the Terms of Service and Privacy Policy" checked=agree_terms/>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || auth.loading.get()
            >
                <LoadingLabel loading=auth.loading idle="Create Account" busy="Creating account..."/>
            </button>

            <p class="auth-switch">
                "Already have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        auth.clear_error();
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </p>
        </form>
    }
}

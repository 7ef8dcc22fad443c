//! Authentication UI module
//!
//! Session context plus the login and register forms shown before the
//! dashboard.

mod context;
mod login_form;
mod register_form;

pub use context::{AuthContext, BrowserStorage, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Branded auth screen toggling between login and register
#[component]
pub fn AuthView(
    /// Fired after a successful login or registration
    #[prop(into)]
    on_authenticated: Callback<()>,
) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);

    view! {
        <div class="auth-page">
            <aside class="auth-brand">
                <h1>"VastraVaani"</h1>
                <p>"AI-powered fashion intelligence for designers and boutiques"</p>
                <ul class="auth-highlights">
                    <li>"Trend forecasting across social platforms"</li>
                    <li>"Fabric and color analysis from a single photo"</li>
                    <li>"AI design generation and virtual try-on"</li>
                </ul>
            </aside>
            <section class="auth-card">
                {move || match mode.get() {
                    AuthMode::Login => view! {
                        <LoginForm
                            on_success=on_authenticated
                            on_register_click=move |_| mode.set(AuthMode::Register)
                        />
                    }
                    .into_any(),
                    AuthMode::Register => view! {
                        <RegisterForm
                            on_success=on_authenticated
                            on_login_click=move |_| mode.set(AuthMode::Login)
                        />
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::{AuthView, provide_auth_context};
use crate::ui::common::LoadingSplash;
use crate::ui::dashboard::{Dashboard, NavKey};
use crate::ui::pages::NotFoundPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vastravaani.css"/>
        <Title text="VastraVaani - AI Fashion Studio"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=Studio/>
            </Routes>
        </Router>
    }
}

/// Splash while the session restores, then the auth screen or the dashboard
#[component]
fn Studio() -> impl IntoView {
    let auth = provide_auth_context();
    let active = RwSignal::new(NavKey::Home);

    // Every sign-in and sign-out starts over on the home page.
    let on_authenticated = Callback::new(move |_| active.set(NavKey::Home));
    let on_logout = Callback::new(move |_| {
        auth.logout();
        active.set(NavKey::Home);
    });

    move || {
        if auth.restoring.get() {
            view! { <LoadingSplash/> }.into_any()
        } else if auth.is_authenticated() {
            view! { <Dashboard active=active on_logout=on_logout/> }.into_any()
        } else {
            view! { <AuthView on_authenticated=on_authenticated/> }.into_any()
        }
    }
}

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn Spinner(#[prop(default = "icon spin")] class: &'static str) -> impl IntoView {
    view! { <Icon name=icons::LOADER class=class/> }
}

/// Button label that swaps to a spinner and busy text while loading
#[component]
pub fn LoadingLabel(
    #[prop(into)] loading: Signal<bool>,
    idle: &'static str,
    busy: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get() fallback=move || view! { <span>{idle}</span> }>
            <span class="loading-label">
                <Spinner/>
                {busy}
            </span>
        </Show>
    }
}

/// Full-screen splash shown while the session restores
#[component]
pub fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash-brand">"VastraVaani"</div>
            <Spinner class="icon icon-lg spin"/>
            <p class="muted">"Loading..."</p>
        </div>
    }
}

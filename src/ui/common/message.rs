//! Inline banners for request errors and confirmations.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error banner, hidden while the signal is `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="banner banner-error" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon icon-sm"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="banner banner-success">
                <Icon name=icons::CHECK class="icon icon-sm"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Neutral one-line status (progress of multi-step work)
#[component]
pub fn StatusLine(
    #[prop(into)]
    status: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || status.get().is_some()>
            <div class="banner banner-info status-line">{move || status.get().unwrap_or_default()}</div>
        </Show>
    }
}

//! Fallback for unknown URLs; the app itself lives at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p class="not-found-glyph">"🧵"</p>
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="muted">"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn btn-primary">
                "Back to VastraVaani"
            </A>
        </div>
    }
    .into_any()
}

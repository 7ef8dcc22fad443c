//! One-shot design image from a free-text description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::design::{QUICK_DESIGN_PATH, QuickDesignRequest, QuickDesignResponse, QuickStyle};
use crate::core::forms::validate_quick_design;
use crate::ui::common::{ErrorMessage, LoadingLabel, OptionSelect, TextAreaField};
use crate::ui::http;

#[component]
pub fn QuickDesignPage() -> impl IntoView {
    let description = RwSignal::new(String::new());
    let style = RwSignal::new(QuickStyle::default());
    let image_url = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let generate = move |_| {
        let text = description.get_untracked();
        if let Err(message) = validate_quick_design(&text) {
            error.set(Some(message));
            return;
        }
        let body = QuickDesignRequest {
            description: text.trim().to_string(),
            style: style.get_untracked(),
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, QuickDesignResponse>(QUICK_DESIGN_PATH, &body).await {
                Ok(response) => image_url.set(Some(response.image_url)),
                Err(e) => error.set(Some(format!("⚠️ {}", e.detail_or("Error generating design")))),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page design-page">
            <header class="page-header">
                <h1 class="page-title">"🎨 VastraVaani AI Design Generator"</h1>
                <p class="muted">"Create unique, AI-powered fashion concepts in seconds ✨"</p>
            </header>

            <section class="panel">
                <TextAreaField
                    label="📝 Design Description"
                    value=description
                    placeholder="Describe your design (e.g., 'An elegant lavender saree with silver embroidery')"
                    rows=4
                />
                <OptionSelect label="🎭 Style" value=style/>
                <button
                    type="button"
                    class="btn btn-primary btn-block"
                    disabled=move || loading.get() || description.with(|d| d.trim().is_empty())
                    on:click=generate
                >
                    <LoadingLabel loading=loading idle="🚀 Generate Design" busy="⏳ Generating..."/>
                </button>
                <ErrorMessage error=error/>
            </section>

            {move || {
                image_url
                    .get()
                    .map(|url| {
                        view! {
                            <section class="panel">
                                <h2>"✨ Your AI-Generated Fashion Design"</h2>
                                <img class="result-image" src=url.clone() alt="Generated Design"/>
                                <a class="btn btn-success" href=url download="">
                                    "📥 Download Design"
                                </a>
                            </section>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}

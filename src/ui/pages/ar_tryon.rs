//! Photo-driven body analysis with a rotating try-on preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::tryon::{
    ANALYZE_IMAGE_PATH, BodyAnalysis, DEFAULT_MODEL_NAME, GENERATE_TRYON_PATH, TryOnRequest,
    TryOnResult, glb_filename,
};
use crate::core::body_mesh::{DEFAULT_SKIN_TONE, GarmentStyle, Measurements};
use crate::ui::body_preview::BodyPreview;
use crate::ui::common::{
    ErrorMessage, FilePicker, OptionSelect, PickedFile, StatusLine, TextField, upload,
};
use crate::ui::http;
use crate::ui::icon::{Icon, icons};

const ANALYSIS_STATUS_MS: u32 = 1400;
const TRYON_STATUS_MS: u32 = 1200;

/// Clear `status` after `ms`, unless something else replaced it meanwhile
async fn clear_status_after(status: RwSignal<String>, ms: u32) {
    #[cfg(not(feature = "ssr"))]
    {
        let shown = status.get_untracked();
        gloo_timers::future::TimeoutFuture::new(ms).await;
        if status.get_untracked() == shown {
            status.set(String::new());
        }
    }
    #[cfg(feature = "ssr")]
    let _ = (status, ms);
}

#[component]
pub fn ArTryOnPage() -> impl IntoView {
    let file = RwSignal::new_local(None::<PickedFile>);
    let name = RwSignal::new(DEFAULT_MODEL_NAME.to_string());
    let measurements = RwSignal::new(Measurements::default());
    let analysis = RwSignal::new(None::<BodyAnalysis>);
    let garment = RwSignal::new(GarmentStyle::default());
    let category = RwSignal::new(garment.get_untracked().category);
    let result = RwSignal::new(None::<TryOnResult>);

    let analyzing = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let status = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let cat = category.get();
        garment.update(|g| g.category = cat);
    });

    // A freshly picked photo is analyzed right away.
    Effect::new(move |_| {
        let Some(picked) = file.get() else {
            return;
        };
        analyzing.set(true);
        error.set(None);
        status.set("🤖 Running AI body analysis...".to_string());
        spawn_local(async move {
            match upload::<BodyAnalysis>(&picked, ANALYZE_IMAGE_PATH, "file", &[], None).await {
                Ok(found) => {
                    measurements.update(|m| *m = found.apply_to(m));
                    analysis.set(Some(found));
                    status.set("✅ Analysis complete — updating 3D model...".to_string());
                    analyzing.set(false);
                    clear_status_after(status, ANALYSIS_STATUS_MS).await;
                }
                Err(e) => {
                    error.set(Some(format!("❌ Analysis failed: {}", e.user_message())));
                    status.set(String::new());
                    analyzing.set(false);
                }
            }
        });
    });

    let generate = move |_| {
        if file.with_untracked(|f| f.is_none()) {
            error.set(Some("Please upload a photo to analyze first.".to_string()));
            return;
        }
        let body = analysis.with_untracked(|a| {
            TryOnRequest::new(&measurements.get_untracked(), a.as_ref(), &garment.get_untracked())
        });

        loading.set(true);
        error.set(None);
        status.set("🎬 Generating try-on...".to_string());
        spawn_local(async move {
            match http::post_json::<_, TryOnResult>(GENERATE_TRYON_PATH, &body).await {
                Ok(generated) => {
                    result.set(Some(generated));
                    status.set("✅ Try-on generation complete.".to_string());
                    loading.set(false);
                    clear_status_after(status, TRYON_STATUS_MS).await;
                }
                Err(e) => {
                    error.set(Some(format!("❌ Try-on failed: {}", e.user_message())));
                    status.set(String::new());
                    loading.set(false);
                }
            }
        });
    };

    let download = move |_| {
        let href = result.with_untracked(|r| r.as_ref().and_then(TryOnResult::glb_href));
        let Some(href) = href else {
            error.set(Some("No downloadable model available.".to_string()));
            return;
        };
        if let Err(e) = http::trigger_href_download(&href, &glb_filename(&name.get_untracked())) {
            error.set(Some(e.user_message()));
        }
    };

    let skin_tone = Signal::derive(move || {
        analysis.with(|a| {
            a.as_ref()
                .map(|a| a.skin_tone().to_string())
                .unwrap_or_else(|| DEFAULT_SKIN_TONE.to_string())
        })
    });

    view! {
        <div class="page tryon-page">
            <header class="page-header">
                <h1 class="page-title">"🤖 VastraVaani — AI 3D Try-On"</h1>
            </header>

            <StatusLine status=Signal::derive(move || Some(status.get()).filter(|s| !s.is_empty()))/>
            <ErrorMessage error=error/>

            <div class="tryon-layout">
                <aside class="tryon-controls">
                    <section class="panel">
                        <h3>"📸 Your Photo"</h3>
                        <FilePicker
                            file=file
                            prompt="Upload a full-body photo"
                            hint="The AI estimates your measurements"
                        />
                        <Show when=move || analyzing.get()>
                            <p class="muted small">"🔍 Analyzing image..."</p>
                        </Show>
                        {move || match analysis.get() {
                            Some(found) => view! {
                                <dl class="detail-list">
                                    {found
                                        .summary_rows()
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <dt>{label}</dt>
                                            <dd class="capitalize">{value}</dd>
                                        })
                                        .collect_view()}
                                </dl>
                            }
                            .into_any(),
                            None => view! {
                                <p class="muted small">"Upload a photo to detect your measurements."</p>
                            }
                            .into_any(),
                        }}
                        <TextField label="Model name" value=name placeholder="Your name"/>
                    </section>

                    <section class="panel">
                        <h3>"👗 Garment"</h3>
                        <OptionSelect label="Category" value=category/>
                        <label class="field">
                            <span class="field-label">"Color"</span>
                            <input
                                type="color"
                                class="color-input"
                                title="Pick garment color"
                                prop:value=move || garment.with(|g| g.color.clone())
                                on:input=move |ev| {
                                    let color = event_target_value(&ev);
                                    garment.update(|g| g.color = color);
                                }
                            />
                        </label>
                    </section>

                    <button
                        type="button"
                        class="btn btn-primary btn-block"
                        disabled=move || loading.get() || file.with(|f| f.is_none())
                        on:click=generate
                    >
                        {move || {
                            if loading.get() { "⏳ Generating Try-On..." } else { "🎬 Generate Try-On" }
                        }}
                    </button>
                    <Show when=move || result.with(|r| r.is_some())>
                        <button type="button" class="btn btn-secondary btn-block" on:click=download>
                            <Icon name=icons::DOWNLOAD class="icon icon-sm"/>
                            "Download 3D Model"
                        </button>
                    </Show>
                </aside>

                <div class="tryon-stage">
                    <section class="panel canvas-panel">
                        <BodyPreview measurements=measurements garment=garment skin_tone=skin_tone/>
                    </section>

                    {move || {
                        result
                            .get()
                            .map(|generated| {
                                let fit = generated.fit_recommendations;
                                view! {
                                    <section class="metric-grid">
                                        <div class="card metric-card">
                                            <p class="muted">"Fit Score"</p>
                                            <p class="metric-value">{fit.score_text()}</p>
                                        </div>
                                        <div class="card metric-card">
                                            <p class="muted">"Recommended Size"</p>
                                            <p class="metric-value">{fit.size().to_string()}</p>
                                        </div>
                                        <div class="card metric-card">
                                            <p class="muted">"Fit Notes"</p>
                                            <p>{fit.notes_text()}</p>
                                        </div>
                                    </section>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
    .into_any()
}

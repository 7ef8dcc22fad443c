//! Fabric recommendation wizard: upload, preferences, results.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::core::api::fabric::{
    ANALYZE_IMAGE_PATH, EXPORT_PDF_PATH, ExportPdfRequest, FabricPreferences,
    FabricRecommendation, OCCASION_OPTIONS, REASONING_PREVIEW_CHARS,
    RECOMMEND_PATH, RecommendRequest, RecommendResponse, SEASON_OPTIONS, STYLE_OPTIONS,
    export_filename,
};
use crate::core::api::OptionSet;
use crate::core::forms::{parse_budget, ratio_percent, split_csv, truncate_preview};
use crate::ui::common::{
    CheckboxField, ErrorMessage, FilePicker, LoadingLabel, OptionSelect, PickedFile, SelectField,
    StepIndicator, TextField, str_options, upload,
};
use crate::ui::http;

const STEPS: &[&str] = &["Upload & Analyze", "Preferences", "Results"];

#[component]
pub fn FabricPage() -> impl IntoView {
    let step = RwSignal::new(1_usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let file = RwSignal::new_local(None::<PickedFile>);
    let image_analysis = RwSignal::new(None::<Value>);

    // Preferences
    let defaults = FabricPreferences::default();
    let garment_type = RwSignal::new(defaults.garment_type);
    let style = RwSignal::new(defaults.style_preference);
    let season = RwSignal::new(defaults.season);
    let occasion = RwSignal::new(defaults.occasion);
    let budget_min = RwSignal::new(defaults.budget_min.to_string());
    let budget_max = RwSignal::new(defaults.budget_max.to_string());
    let colors = RwSignal::new(String::new());
    let fabrics = RwSignal::new(String::new());
    let sustainability = RwSignal::new(defaults.sustainability);

    let recommendations = RwSignal::new(Vec::<FabricRecommendation>::new());
    let ai_summary = RwSignal::new(String::new());
    let submitted = RwSignal::new(None::<FabricPreferences>);

    let shown_error = Signal::derive(move || error.get().map(|e| format!("❌ {e}")));

    let analyze = move |_| {
        let Some(picked) = file.get_untracked() else {
            error.set(Some("Please upload an image first.".to_string()));
            return;
        };
        let garment = garment_type.get_untracked();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let extra = [("garment_type", garment.key())];
            match upload::<Value>(&picked, ANALYZE_IMAGE_PATH, "file", &extra, None).await {
                Ok(analysis) => {
                    image_analysis.set(Some(analysis));
                    step.set(2);
                }
                Err(e) => error.set(Some(e.detail_or("Error analyzing image"))),
            }
            loading.set(false);
        });
    };

    let recommend = move |_| {
        let (min, max) = match parse_budget(&budget_min.get_untracked(), &budget_max.get_untracked())
        {
            Ok(range) => range,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let preferences = FabricPreferences {
            garment_type: garment_type.get_untracked(),
            style_preference: style.get_untracked(),
            season: season.get_untracked(),
            color_preferences: split_csv(&colors.get_untracked()),
            fabric_preferences: split_csv(&fabrics.get_untracked()),
            budget_min: min,
            budget_max: max,
            occasion: occasion.get_untracked(),
            sustainability: sustainability.get_untracked(),
        };
        let analysis = image_analysis.get_untracked().unwrap_or(Value::Null);
        let body = RecommendRequest::new(preferences.clone(), &analysis);

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, RecommendResponse>(RECOMMEND_PATH, &body).await {
                Ok(response) => {
                    recommendations.set(response.recommendations);
                    ai_summary.set(response.ai_summary);
                    submitted.set(Some(preferences));
                    step.set(3);
                }
                Err(e) => error.set(Some(e.detail_or("Error getting recommendations"))),
            }
            loading.set(false);
        });
    };

    let export_pdf = move |_| {
        let analysis = image_analysis.get_untracked().unwrap_or(Value::Null);
        let preferences = submitted.get_untracked().unwrap_or_default();
        let recs = recommendations.get_untracked();
        let summary = ai_summary.get_untracked();
        spawn_local(async move {
            let body = ExportPdfRequest {
                recommendations: &recs,
                image_analysis: &analysis,
                user_preferences: &preferences,
                ai_summary: &summary,
            };
            let filename = export_filename(chrono::Utc::now().timestamp_millis().max(0) as u64);
            let result = match http::post_json_for_blob(EXPORT_PDF_PATH, &body).await {
                Ok(bytes) => http::trigger_download(&bytes, "application/pdf", &filename),
                Err(e) => Err(e),
            };
            if result.is_err() {
                error.set(Some("Error exporting PDF".to_string()));
            }
        });
    };

    let start_over = move |_| {
        if let Some(picked) = file.get_untracked() {
            picked.release();
        }
        file.set(None);
        image_analysis.set(None);
        recommendations.set(Vec::new());
        ai_summary.set(String::new());
        error.set(None);
        step.set(1);
    };

    view! {
        <div class="page fabric-page">
            <header class="page-header">
                <h1 class="page-title">"🧵 VastraVaani Fabric Intelligence"</h1>
                <p class="muted">
                    "AI-driven fabric recommendations, powered by your style, season and preferences"
                </p>
            </header>

            <StepIndicator steps=STEPS current=step/>
            <ErrorMessage error=shown_error/>

            <Show when=move || step.get() == 1>
                <section class="panel">
                    <h2>"📸 Upload Design Image"</h2>
                    <OptionSelect label="Garment Type" value=garment_type/>
                    <FilePicker
                        file=file
                        prompt="Click or drag to upload garment image"
                        hint="Supported: JPG, PNG (max 10MB)"
                    />
                    <button
                        type="button"
                        class="btn btn-primary btn-block"
                        disabled=move || loading.get() || file.with(|f| f.is_none())
                        on:click=analyze
                    >
                        <LoadingLabel loading=loading idle="🔍 Analyze Image" busy="Analyzing..."/>
                    </button>
                </section>
            </Show>

            <Show when=move || step.get() == 2>
                <section class="panel">
                    <h2>"⚙️ Personalize Your Fabric Search"</h2>
                    <div class="form-grid form-grid-2">
                        <SelectField label="Style" value=style options=str_options(STYLE_OPTIONS)/>
                        <SelectField label="Season" value=season options=str_options(SEASON_OPTIONS)/>
                        <SelectField label="Occasion" value=occasion options=str_options(OCCASION_OPTIONS)/>
                        <div></div>
                        <TextField label="Budget Min (₹)" value=budget_min input_type="number"/>
                        <TextField label="Budget Max (₹)" value=budget_max input_type="number"/>
                        <TextField label="Color Preferences" value=colors placeholder="e.g., Red, Blue, Green"/>
                        <TextField label="Fabric Preferences" value=fabrics placeholder="e.g., Cotton, Silk, Linen"/>
                    </div>
                    <CheckboxField label="🌱 Prioritize sustainable fabrics" checked=sustainability/>
                    <div class="button-row">
                        <button type="button" class="btn btn-secondary" on:click=move |_| step.set(1)>
                            "← Back"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=move || loading.get()
                            on:click=recommend
                        >
                            <LoadingLabel loading=loading idle="🎯 Get Recommendations" busy="Loading..."/>
                        </button>
                    </div>
                </section>
            </Show>

            <Show when=move || step.get() == 3>
                <section class="panel panel-accent">
                    <h2>"🤖 AI Summary"</h2>
                    <p>{move || ai_summary.get()}</p>
                </section>

                <section class="panel">
                    <div class="panel-header">
                        <h2>{move || format!("🧶 Recommended Fabrics ({})", recommendations.with(Vec::len))}</h2>
                        <button type="button" class="btn btn-success" on:click=export_pdf>
                            "📄 Export PDF"
                        </button>
                    </div>
                    <div class="table-scroll">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Image"</th>
                                    <th>"Fabric Name"</th>
                                    <th>"Type"</th>
                                    <th>"Price/m"</th>
                                    <th>"Supplier"</th>
                                    <th>"Match"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || recommendations.get().into_iter().map(recommendation_row).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </section>

                <button type="button" class="btn btn-secondary btn-block" on:click=start_over>
                    "🔄 Start New Search"
                </button>
            </Show>
        </div>
    }
    .into_any()
}

fn recommendation_row(rec: FabricRecommendation) -> impl IntoView {
    let preview = truncate_preview(&rec.ai_reasoning, REASONING_PREVIEW_CHARS);
    let image = match rec.image_url.clone().filter(|u| !u.is_empty()) {
        Some(src) => view! { <img class="thumb" src=src alt=rec.fabric_name.clone()/> }.into_any(),
        None => view! { <div class="thumb thumb-placeholder">"🧵"</div> }.into_any(),
    };

    view! {
        <tr>
            <td>{image}</td>
            <td>
                <p class="strong">{rec.fabric_name}</p>
                <p class="muted small">{preview}</p>
            </td>
            <td>{rec.fabric_type}</td>
            <td>{format!("₹{}", rec.price_per_meter)}</td>
            <td>{rec.supplier}</td>
            <td><span class="pill pill-success">{ratio_percent(rec.compatibility_score)}</span></td>
            <td>
                {rec
                    .purchase_link
                    .filter(|l| !l.is_empty())
                    .map(|link| {
                        view! {
                            <a class="btn btn-primary btn-small" href=link target="_blank" rel="noopener noreferrer">
                                "Buy 🛒"
                            </a>
                        }
                    })}
            </td>
        </tr>
    }
}

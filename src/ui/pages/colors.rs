//! Color and pattern analysis of an uploaded design image.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::colors::{
    ANALYZE_PATH, ANALYZE_TIMEOUT_MS, ColorAnalysis, ColorPalette, PaletteColor,
};
use crate::core::forms::ratio_percent;
use crate::ui::common::{ErrorMessage, FilePicker, LoadingLabel, PickedFile, upload};

#[component]
pub fn ColorsPage() -> impl IntoView {
    let file = RwSignal::new_local(None::<PickedFile>);
    let analysis = RwSignal::new(None::<ColorAnalysis>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let analyze = move |_| {
        let Some(picked) = file.get_untracked() else {
            error.set(Some("Please upload an image first.".to_string()));
            return;
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result =
                upload::<ColorAnalysis>(&picked, ANALYZE_PATH, "file", &[], Some(ANALYZE_TIMEOUT_MS))
                    .await;
            match result {
                Ok(result) => analysis.set(Some(result)),
                Err(e) => error.set(Some(format!("❌ {}", e.user_message()))),
            }
            loading.set(false);
        });
    };

    let reset = move |_| {
        if let Some(picked) = file.get_untracked() {
            picked.release();
        }
        file.set(None);
        analysis.set(None);
        error.set(None);
    };

    view! {
        <div class="page colors-page">
            <header class="page-header">
                <h1 class="page-title">"🎨 Color & Pattern Analyzer"</h1>
                <p class="muted">
                    "Discover color palettes, detect fabric patterns and gain AI-driven fashion insights from your design images."
                </p>
            </header>

            <ErrorMessage error=error/>

            <div class="two-column">
                <section class="panel">
                    <h2>"📸 Upload Design"</h2>
                    <FilePicker
                        file=file
                        prompt="Click to upload or drag and drop"
                        hint="Supports JPG, PNG (max 10MB)"
                    />
                    <button
                        type="button"
                        class="btn btn-primary btn-block"
                        disabled=move || loading.get() || file.with(|f| f.is_none())
                        on:click=analyze
                    >
                        <LoadingLabel loading=loading idle="✨ Analyze Image" busy="Analyzing..."/>
                    </button>
                </section>

                {move || {
                    analysis
                        .get()
                        .map(|result| {
                            let pattern = result.pattern_analysis.clone();
                            let confidence = ratio_percent(pattern.confidence);
                            view! {
                                <section class="panel">
                                    {result
                                        .image_src()
                                        .map(|src| {
                                            view! {
                                                <h3>"✅ Analyzed Image"</h3>
                                                <img class="result-image" src=src alt="Analyzed design"/>
                                            }
                                        })}
                                    <h3>"🔍 Pattern Analysis"</h3>
                                    <p>
                                        <span class="muted">"Type: "</span>
                                        <strong class="capitalize">{pattern.kind}</strong>
                                    </p>
                                    <p>{pattern.description}</p>
                                    <p class="muted">"Confidence"</p>
                                    <div class="progress">
                                        <div class="progress-bar" style:width=confidence.clone()></div>
                                    </div>
                                    <p class="muted small">{confidence}</p>
                                </section>
                            }
                        })
                }}
            </div>

            {move || analysis.get().map(|result| view! { <AnalysisDetails analysis=result/> })}

            <Show when=move || analysis.with(|a| a.is_some())>
                <button type="button" class="btn btn-secondary btn-block" on:click=reset>
                    "🔄 New Upload"
                </button>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn AnalysisDetails(analysis: ColorAnalysis) -> impl IntoView {
    let ColorAnalysis {
        dominant_colors,
        color_palette,
        ai_insights,
        styling_recommendations,
        ..
    } = analysis;

    view! {
        {(!dominant_colors.is_empty())
            .then(|| {
                view! {
                    <section class="panel">
                        <h2>"🎨 Dominant Colors"</h2>
                        <div class="swatch-grid">
                            {dominant_colors
                                .into_iter()
                                .map(|color| {
                                    view! {
                                        <div class="swatch">
                                            <div class="swatch-chip" style:background-color=color.hex.clone()></div>
                                            <p class="swatch-name">{color.name}</p>
                                            <p class="muted small">{color.hex}</p>
                                            <p class="muted small">{format!("{}%", color.percentage)}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
            })}

        <PaletteView palette=color_palette/>

        {(!ai_insights.trim().is_empty())
            .then(|| {
                view! {
                    <section class="panel panel-accent">
                        <h2>"🤖 AI Insights"</h2>
                        <p>{ai_insights}</p>
                    </section>
                }
            })}

        {(!styling_recommendations.trim().is_empty())
            .then(|| {
                view! {
                    <section class="panel panel-accent">
                        <h2>"👗 Styling Recommendations"</h2>
                        <p>{styling_recommendations}</p>
                    </section>
                }
            })}
    }
}

fn palette_swatch(color: PaletteColor) -> impl IntoView {
    view! {
        <div class="swatch">
            <div class="swatch-chip" style:background-color=color.hex.clone()></div>
            <p class="swatch-name">{color.name}</p>
            <p class="muted small">{color.hex}</p>
        </div>
    }
}

#[component]
fn PaletteView(palette: ColorPalette) -> impl IntoView {
    let ColorPalette {
        harmony_type,
        primary,
        secondary,
        complementary,
    } = palette;

    let has_colors = primary.is_some() || !secondary.is_empty() || complementary.is_some();

    has_colors.then(|| {
        view! {
            <section class="panel">
                <h2>"🌈 AI-Generated Palette"</h2>
                <p class="muted">
                    "Harmony Type: "
                    <strong class="capitalize">{harmony_type}</strong>
                </p>
                {primary
                    .map(|primary| {
                        let rgb = primary.rgb.map(|rgb| rgb.css().to_uppercase());
                        view! {
                            <div class="palette-primary">
                                <div class="swatch-chip swatch-chip-lg" style:background-color=primary.hex.clone()></div>
                                <div>
                                    <p class="swatch-name">{primary.name}</p>
                                    <p class="muted small">{primary.hex}</p>
                                    {rgb.map(|rgb| view! { <p class="muted small">{rgb}</p> })}
                                </div>
                            </div>
                        }
                    })}
                <div class="swatch-grid">
                    {secondary.into_iter().map(palette_swatch).collect_view()}
                    {complementary.map(palette_swatch)}
                </div>
            </section>
        }
    })
}

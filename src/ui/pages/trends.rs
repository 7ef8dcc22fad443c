//! Advanced trend analysis across social platforms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::OptionSet;
use crate::core::api::trends::{
    self, ANALYZE_PATH, DEFAULT_HASHTAGS, DEFAULT_KEYWORDS, DEFAULT_THEME, Depth, Platform,
    Region, TimeRange, TrendQuery, TrendReport, TrendRequest, TrendResponse, chart_label,
};
use crate::ui::common::{ErrorMessage, LoadingLabel, OptionSelect, TextField};
use crate::ui::http;
use crate::ui::markdown::Markdown;

#[component]
pub fn TrendsPage() -> impl IntoView {
    let theme = RwSignal::new(DEFAULT_THEME.to_string());
    let hashtags = RwSignal::new(DEFAULT_HASHTAGS.to_string());
    let keywords = RwSignal::new(DEFAULT_KEYWORDS.to_string());
    let platforms = RwSignal::new(TrendQuery::default().platforms);
    let region = RwSignal::new(Region::default());
    let time_range = RwSignal::new(TimeRange::default());
    let depth = RwSignal::new(Depth::default());

    let report = RwSignal::new(None::<TrendReport>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let analyze = move |_| {
        let query = TrendQuery {
            theme: theme.get_untracked(),
            platforms: platforms.get_untracked(),
            hashtags: hashtags.get_untracked(),
            keywords: keywords.get_untracked(),
            region: region.get_untracked(),
            time_range: time_range.get_untracked(),
            depth: depth.get_untracked(),
        };
        let body = TrendRequest::from(&query);

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, TrendResponse>(ANALYZE_PATH, &body).await {
                Ok(response) => report.set(Some(response.data)),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page trends-page">
            <section class="panel">
                <h1 class="page-title">"Advanced Trend Analysis"</h1>
                <p class="muted">"Real-time web scraping · AI-based insights · Visual analytics"</p>

                <TextField
                    label="Trend Theme"
                    value=theme
                    placeholder="e.g., Streetwear 2025, Minimalism, Sustainable Fashion"
                />

                <div class="field">
                    <span class="field-label">"Platforms"</span>
                    <div class="checkbox-row">
                        {Platform::ALL
                            .iter()
                            .map(|platform| {
                                let platform = *platform;
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || platforms.with(|p| p.contains(&platform))
                                            on:change=move |_| {
                                                platforms.update(|p| trends::toggle_platform(p, platform))
                                            }
                                        />
                                        <span>{platform.label()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form-grid form-grid-2">
                    <TextField label="Hashtags" value=hashtags placeholder="#streetwear #fashion2025 #ootd"/>
                    <TextField label="Keywords" value=keywords placeholder="oversized, vintage, sustainable"/>
                </div>

                <div class="form-grid form-grid-3">
                    <OptionSelect label="Region" value=region/>
                    <OptionSelect label="Time Range (days)" value=time_range/>
                    <OptionSelect label="Analysis Depth" value=depth/>
                </div>

                <button
                    type="button"
                    class="btn btn-primary btn-block"
                    disabled=move || loading.get()
                    on:click=analyze
                >
                    <LoadingLabel
                        loading=loading
                        idle="Start Advanced Analysis"
                        busy="Analyzing... Please wait ⏳"
                    />
                </button>

                <ErrorMessage error=error/>
            </section>

            {move || report.get().map(|report| view! { <TrendResults report=report/> })}
        </div>
    }
    .into_any()
}

#[component]
fn TrendResults(report: TrendReport) -> impl IntoView {
    let TrendReport {
        metrics,
        charts,
        insights,
    } = report;

    view! {
        <section class="results">
            <div class="metric-grid">
                {metrics
                    .cards()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="card metric-card">
                                <p class="muted">{label}</p>
                                <p class="metric-value">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {charts
                .into_iter()
                .map(|(key, src)| {
                    let label = chart_label(&key);
                    view! {
                        <div class="card chart-card">
                            <h4>{label.clone()}</h4>
                            <img class="chart-image" src=src alt=label/>
                        </div>
                    }
                })
                .collect_view()}

            {insights
                .ai_forecast
                .filter(|f| !f.trim().is_empty())
                .map(|forecast| {
                    view! {
                        <div class="card">
                            <h3>"AI Forecast"</h3>
                            <Markdown content=forecast/>
                        </div>
                    }
                })}

            {(!insights.recommendations.is_empty())
                .then(|| {
                    view! {
                        <div class="card">
                            <h3>"AI Recommendations"</h3>
                            <ul class="bullet-list">
                                {insights
                                    .recommendations
                                    .into_iter()
                                    .map(|rec| view! { <li>{rec}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
        </section>
    }
}

//! Guided three-step design generator: brief, prompt review, image.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::OptionSet;
use crate::core::api::design::{
    DOWNLOAD_IMAGE_PATH, DesignBrief, FABRICS, GENERATE_IMAGE_PATH, GENERATE_PROMPT_PATH, Gender,
    ImageFormat, ImageRequest, ImageResponse, OCCASIONS, PromptRequest, PromptResponse, REGIONS,
    download_query,
};
use crate::ui::common::{
    CheckboxField, ErrorMessage, LoadingLabel, OptionSelect, SelectField, StepIndicator,
    TextAreaField, TextField, str_options,
};
use crate::ui::http;

const STEPS: &[&str] = &["Design Input", "Preview & Refine", "Generated Output"];

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "👗 Female",
        Gender::Male => "👔 Male",
    }
}

#[component]
pub fn DesignGeneratorPage() -> impl IntoView {
    let step = RwSignal::new(1_usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let brief = DesignBrief::default();
    let gender = RwSignal::new(brief.gender);
    let outfit_type = RwSignal::new(brief.outfit_type);
    let occasion = RwSignal::new(brief.occasion);
    let colors = RwSignal::new(brief.colors);
    let fabric_preference = RwSignal::new(brief.fabric_preference);
    let regional_preference = RwSignal::new(brief.regional_preference);
    let style_keywords = RwSignal::new(brief.style_keywords);
    let design_description = RwSignal::new(brief.design_description);

    let generated = RwSignal::new(PromptResponse::default());
    let prompt = RwSignal::new(String::new());
    let image = RwSignal::new(None::<String>);
    let use_refiner = RwSignal::new(true);
    let download_format = RwSignal::new(ImageFormat::default());

    let shown_error = Signal::derive(move || error.get().map(|e| format!("⚠️ {e}")));

    let choose_gender = move |choice: Gender| {
        gender.set(choice);
        outfit_type.set(choice.default_outfit().to_string());
    };

    let generate_prompt = move |_| {
        let brief = DesignBrief {
            gender: gender.get_untracked(),
            outfit_type: outfit_type.get_untracked(),
            occasion: occasion.get_untracked(),
            colors: colors.get_untracked(),
            fabric_preference: fabric_preference.get_untracked(),
            regional_preference: regional_preference.get_untracked(),
            style_keywords: style_keywords.get_untracked(),
            design_description: design_description.get_untracked(),
        };
        let body = PromptRequest::from(&brief);

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, PromptResponse>(GENERATE_PROMPT_PATH, &body).await {
                Ok(response) => {
                    prompt.set(response.prompt.clone());
                    generated.set(response);
                    step.set(2);
                }
                Err(e) => error.set(Some(e.detail_or("Error generating prompt"))),
            }
            loading.set(false);
        });
    };

    let generate_image = move |_| {
        let body = ImageRequest {
            prompt: prompt.get_untracked(),
            use_refiner: use_refiner.get_untracked(),
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, ImageResponse>(GENERATE_IMAGE_PATH, &body).await {
                Ok(response) => {
                    image.set(Some(response.image));
                    step.set(3);
                }
                Err(e) => error.set(Some(e.detail_or("Error generating image"))),
            }
            loading.set(false);
        });
    };

    let download = move |_| {
        let format = download_format.get_untracked();
        let query = download_query(&prompt.get_untracked(), format, use_refiner.get_untracked());
        spawn_local(async move {
            let pairs: Vec<(&str, &str)> =
                query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let result = match http::post_query_for_blob(DOWNLOAD_IMAGE_PATH, &pairs).await {
                Ok(bytes) => http::trigger_download(&bytes, format.mime(), &format.filename()),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(format!("Download failed: {e}")));
            }
        });
    };

    let reset = move |_| {
        step.set(1);
        image.set(None);
        error.set(None);
    };

    view! {
        <div class="page generator-page">
            <header class="page-header">
                <h1 class="page-title">"👗 VastraVaani AI Design Generator"</h1>
                <p class="muted">"Generate Custom Fashion Designs • Powered by Pinterest + AI"</p>
            </header>

            <StepIndicator steps=STEPS current=step/>
            <ErrorMessage error=shown_error/>

            <Show when=move || step.get() == 1>
                <section class="panel">
                    <h2>"✨ Design Input Details"</h2>
                    <div class="segmented">
                        {Gender::ALL
                            .iter()
                            .map(|choice| {
                                let choice = *choice;
                                view! {
                                    <button
                                        type="button"
                                        class="segment"
                                        class:segment-active=move || gender.get() == choice
                                        on:click=move |_| choose_gender(choice)
                                    >
                                        {gender_label(choice)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="form-grid form-grid-2">
                        <SelectField
                            label="Outfit Type"
                            value=outfit_type
                            options=Signal::derive(move || {
                                gender
                                    .get()
                                    .outfits()
                                    .iter()
                                    .map(|o| (o.to_string(), o.to_string()))
                                    .collect::<Vec<_>>()
                            })
                        />
                        <SelectField label="Occasion" value=occasion options=str_options(OCCASIONS)/>
                    </div>
                    <TextField label="Colors" value=colors placeholder="Colors (comma-separated)"/>
                    <div class="form-grid form-grid-2">
                        <SelectField label="Fabric" value=fabric_preference options=str_options(FABRICS)/>
                        <SelectField label="Region" value=regional_preference options=str_options(REGIONS)/>
                    </div>
                    <TextField
                        label="Style Keywords"
                        value=style_keywords
                        placeholder="Style keywords (e.g., embroidered, elegant)"
                    />
                    <TextAreaField
                        label="Design Description"
                        value=design_description
                        placeholder="Describe your design vision..."
                    />
                    <button
                        type="button"
                        class="btn btn-primary btn-block"
                        disabled=move || loading.get()
                        on:click=generate_prompt
                    >
                        <LoadingLabel
                            loading=loading
                            idle="🚀 Generate Design Inspirations"
                            busy="⏳ Generating..."
                        />
                    </button>
                </section>
            </Show>

            <Show when=move || step.get() == 2>
                {move || {
                    let PromptResponse { summary, fabrics, inspiration_collage, inspiration_count, .. } =
                        generated.get();
                    view! {
                        {inspiration_collage
                            .filter(|c| !c.is_empty())
                            .map(|collage| {
                                view! {
                                    <section class="panel">
                                        <h3>{format!("📌 Pinterest Inspirations ({inspiration_count})")}</h3>
                                        <img class="result-image" src=collage alt="Inspiration collage"/>
                                    </section>
                                }
                            })}
                        {(!summary.trim().is_empty())
                            .then(|| {
                                view! {
                                    <section class="panel panel-accent">
                                        <h3>"🧠 Design Summary"</h3>
                                        <p>{summary}</p>
                                    </section>
                                }
                            })}
                        {(!fabrics.is_empty())
                            .then(|| {
                                view! {
                                    <section class="panel">
                                        <h3>"🧵 Suggested Fabrics"</h3>
                                        <div class="card-grid">
                                            {fabrics
                                                .into_iter()
                                                .map(|note| {
                                                    view! {
                                                        <div class="card">
                                                            <p class="strong">{note.fabric}</p>
                                                            <p class="muted small">{note.properties}</p>
                                                            <p class="muted small">{format!("Care: {}", note.care)}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </section>
                                }
                            })}
                    }
                }}
                <section class="panel">
                    <TextAreaField label="✏️ AI Image Prompt" value=prompt rows=6/>
                    <CheckboxField label="Use refiner for extra detail" checked=use_refiner/>
                    <div class="button-row">
                        <button type="button" class="btn btn-secondary" on:click=move |_| step.set(1)>
                            "← Back"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=move || loading.get()
                            on:click=generate_image
                        >
                            <LoadingLabel loading=loading idle="🎨 Generate AI Design →" busy="⏳ Generating..."/>
                        </button>
                    </div>
                </section>
            </Show>

            <Show when=move || step.get() == 3>
                {move || {
                    image
                        .get()
                        .map(|src| {
                            view! {
                                <section class="panel">
                                    <h3>"💫 Your AI-Generated Design"</h3>
                                    <img class="result-image" src=src alt="AI Design"/>
                                </section>
                            }
                        })
                }}
                <section class="panel button-row">
                    <OptionSelect label="Format" value=download_format/>
                    <button type="button" class="btn btn-success" on:click=download>
                        "📥 Download"
                    </button>
                </section>
                <button type="button" class="btn btn-secondary btn-block" on:click=reset>
                    "🔁 Create New Design"
                </button>
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_labels() {
        assert_eq!(gender_label(Gender::Female), "👗 Female");
        assert_eq!(gender_label(Gender::Male), "👔 Male");
    }
}

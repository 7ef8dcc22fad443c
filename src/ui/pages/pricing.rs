//! Pricing strategy suggestions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::pricing::{PricingRequest, PricingResponse, SUGGEST_PATH, TargetMarket};
use crate::core::forms::validate_pricing;
use crate::ui::common::{ErrorMessage, LoadingLabel, OptionSelect, TextField};
use crate::ui::http;
use crate::ui::markdown::Markdown;

#[component]
pub fn PricingPage() -> impl IntoView {
    let product_name = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let target_market = RwSignal::new(TargetMarket::default());
    let competition = RwSignal::new(String::new());

    let strategy = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let incomplete = move || {
        product_name.with(|n| n.trim().is_empty()) || cost.with(|c| c.trim().is_empty())
    };

    let suggest = move |_| {
        let name = product_name.get_untracked();
        let cost = match validate_pricing(&name, &cost.get_untracked()) {
            Ok(cost) => cost,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let body = PricingRequest {
            product_name: name.trim().to_string(),
            cost,
            target_market: target_market.get_untracked(),
            competition: competition.get_untracked(),
        };

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, PricingResponse>(SUGGEST_PATH, &body).await {
                Ok(response) => strategy.set(Some(response.strategy)),
                Err(e) => error.set(Some(
                    e.detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Error: {e}")),
                )),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page pricing-page">
            <section class="panel">
                <h1 class="page-title">"💰 Smart Pricing Strategy"</h1>

                <div class="form-grid form-grid-2">
                    <TextField label="Product Name" value=product_name placeholder="Product Name"/>
                    <TextField
                        label="Production Cost"
                        value=cost
                        input_type="number"
                        placeholder="Production Cost ($)"
                    />
                    <OptionSelect label="Target Market" value=target_market/>
                    <TextField label="Competition" value=competition placeholder="Competition Level"/>
                </div>

                <button
                    type="button"
                    class="btn btn-primary btn-block"
                    disabled=move || loading.get() || incomplete()
                    on:click=suggest
                >
                    <LoadingLabel loading=loading idle="📊 Get Pricing Strategy" busy="🔄 Analyzing..."/>
                </button>

                <ErrorMessage error=error/>
            </section>

            {move || {
                strategy
                    .get()
                    .map(|strategy| {
                        view! {
                            <section class="panel">
                                <h3>"📈 Suggested Strategy"</h3>
                                <Markdown content=strategy/>
                            </section>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}

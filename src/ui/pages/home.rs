//! Dashboard landing page: hero carousel, feature cards and headline stats.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::reactive::owner::LocalStorage;

use crate::ui::dashboard::{NavKey, Navigation};

/// Auto-advance period of the hero carousel
#[cfg(not(feature = "ssr"))]
const SLIDE_INTERVAL_MS: u32 = 5_000;

pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub images: [&'static str; 3],
    pub cta: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 2] = [
    HeroSlide {
        title: "VASTRAVAANI ON YOU!",
        subtitle: "Experience AI-powered fashion in our latest collection this season",
        images: [
            "https://i.pinimg.com/736x/b1/35/df/b135df3c0e7ecb4e457bdf43e5778355.jpg",
            "https://i.pinimg.com/736x/de/f1/8d/def18d9fd555f241780233e547b76e28.jpg",
            "https://i.pinimg.com/1200x/12/c0/e5/12c0e5d58f921f4bc9466f6026f20b83.jpg",
        ],
        cta: "EXPLORE COLLECTION",
    },
    HeroSlide {
        title: "DESIGN YOUR STYLE",
        subtitle: "AI-powered design tools for modern fashion",
        images: [
            "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=600&q=80",
            "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=600&q=80",
            "https://images.unsplash.com/photo-1445205170230-053b83016050?w=600&q=80",
        ],
        cta: "START DESIGNING",
    },
];

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub target: NavKey,
}

pub static FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        title: "AI Design Studio",
        description: "Create stunning designs instantly",
        glyph: "✨",
        target: NavKey::Generator,
    },
    FeatureCard {
        title: "Virtual Try-On",
        description: "See yourself in any outfit",
        glyph: "👓",
        target: NavKey::ArTryOn,
    },
    FeatureCard {
        title: "Trend Analytics",
        description: "Stay ahead of fashion trends",
        glyph: "📊",
        target: NavKey::Trends,
    },
    FeatureCard {
        title: "Fabric Intelligence",
        description: "Find the right fabric from a photo",
        glyph: "🧶",
        target: NavKey::FabricAi,
    },
    FeatureCard {
        title: "Color Analysis",
        description: "Extract palettes and patterns",
        glyph: "🎨",
        target: NavKey::Colors,
    },
    FeatureCard {
        title: "Personal Stylist",
        description: "Chat with an AI fashion expert",
        glyph: "👗",
        target: NavKey::Stylist,
    },
];

pub static STATS: [(&str, &str, &str); 4] = [
    ("11", "AI Agents", "Specialized experts"),
    ("1000+", "Designs", "Ready to use"),
    ("50K+", "Colors", "Perfect palettes"),
    ("24/7", "Support", "Always here"),
];

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

pub fn previous_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = Navigation::use_context();
    let current = RwSignal::new(0_usize);

    #[cfg(not(feature = "ssr"))]
    let timer: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage> = {
        let interval = gloo_timers::callback::Interval::new(SLIDE_INTERVAL_MS, move || {
            current.update(|c| *c = next_slide(*c, HERO_SLIDES.len()));
        });
        StoredValue::new_local(Some(interval))
    };

    // Manual selection stops the auto-advance for good.
    let select = move |index: usize| {
        #[cfg(not(feature = "ssr"))]
        timer.update_value(|t| {
            if let Some(interval) = t.take() {
                interval.cancel();
            }
        });
        current.set(index);
    };

    let slide = move || &HERO_SLIDES[current.get() % HERO_SLIDES.len()];

    view! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-images">
                    {move || {
                        slide()
                            .images
                            .iter()
                            .enumerate()
                            .map(|(i, src)| {
                                view! {
                                    <img class="hero-image" src=*src alt=format!("Slide image {}", i + 1)/>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="hero-overlay">
                    <h1>{move || slide().title}</h1>
                    <p>{move || slide().subtitle}</p>
                    <button type="button" class="btn btn-dark" on:click=move |_| nav.go(NavKey::Generator)>
                        {move || slide().cta}
                    </button>
                </div>
                <button
                    type="button"
                    class="hero-arrow hero-arrow-left"
                    on:click=move |_| select(previous_slide(current.get_untracked(), HERO_SLIDES.len()))
                >
                    "← PREV"
                </button>
                <button
                    type="button"
                    class="hero-arrow hero-arrow-right"
                    on:click=move |_| select(next_slide(current.get_untracked(), HERO_SLIDES.len()))
                >
                    "NEXT →"
                </button>
                <div class="hero-dots">
                    {(0..HERO_SLIDES.len())
                        .map(|i| {
                            view! {
                                <button
                                    type="button"
                                    class="hero-dot"
                                    class:hero-dot-active=move || current.get() == i
                                    aria-label=format!("Slide {}", i + 1)
                                    on:click=move |_| select(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <p class="eyebrow">"NEW IN"</p>
                <h2>"This Season's Highlights"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            let target = feature.target;
                            view! {
                                <button type="button" class="card feature-card" on:click=move |_| nav.go(target)>
                                    <span class="feature-glyph">{feature.glyph}</span>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.description}</p>
                                    <span class="feature-link">"DISCOVER →"</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section stats">
                {STATS
                    .iter()
                    .map(|(value, label, description)| {
                        view! {
                            <div class="stat">
                                <p class="stat-value">{*value}</p>
                                <p class="stat-label">{*label}</p>
                                <p class="muted">{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section cta">
                <h2>"Ready to Transform Your Fashion?"</h2>
                <p>"Join thousands using VASTRAVAANI's AI-powered tools to create amazing fashion."</p>
                <div class="cta-actions">
                    <button type="button" class="btn btn-light" on:click=move |_| nav.go(NavKey::Generator)>
                        "GET STARTED"
                    </button>
                    <button type="button" class="btn btn-outline-light" on:click=move |_| nav.go(NavKey::Trends)>
                        "EXPLORE TRENDS"
                    </button>
                </div>
            </section>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_wrap_around() {
        assert_eq!(next_slide(0, 2), 1);
        assert_eq!(next_slide(1, 2), 0);
        assert_eq!(previous_slide(0, 2), 1);
        assert_eq!(previous_slide(1, 2), 0);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(previous_slide(0, 0), 0);
    }

    #[test]
    fn test_feature_cards_point_at_pages() {
        assert!(FEATURES.iter().all(|f| f.target != NavKey::Home));
    }
}

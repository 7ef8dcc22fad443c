//! Static fabric catalog filtered by material family.

use leptos::prelude::*;

use crate::ui::common::Tabs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabricKind {
    Natural,
    Luxury,
    Eco,
    Synthetic,
}

/// Filter tab; `All` shows the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FabricFilter {
    #[default]
    All,
    Only(FabricKind),
}

impl FabricFilter {
    pub const TABS: [(FabricFilter, &'static str); 5] = [
        (FabricFilter::All, "ALL"),
        (FabricFilter::Only(FabricKind::Natural), "NATURAL"),
        (FabricFilter::Only(FabricKind::Luxury), "LUXURY"),
        (FabricFilter::Only(FabricKind::Eco), "ECO"),
        (FabricFilter::Only(FabricKind::Synthetic), "SYNTHETIC"),
    ];

    pub fn matches(self, kind: FabricKind) -> bool {
        match self {
            FabricFilter::All => true,
            FabricFilter::Only(only) => only == kind,
        }
    }
}

pub struct CatalogFabric {
    pub name: &'static str,
    pub kind: FabricKind,
    pub properties: [&'static str; 3],
    pub sustainability: &'static str,
    pub image: &'static str,
}

pub static CATALOG: [CatalogFabric; 6] = [
    CatalogFabric {
        name: "Premium Cotton",
        kind: FabricKind::Natural,
        properties: ["Breathable", "Soft", "Durable"],
        sustainability: "High",
        image: "https://images.unsplash.com/photo-1585499539261-3e158e9e0a26?w=500&q=80",
    },
    CatalogFabric {
        name: "Silk Blend",
        kind: FabricKind::Luxury,
        properties: ["Lustrous", "Smooth", "Elegant"],
        sustainability: "Medium",
        image: "https://images.unsplash.com/photo-1528459801416-a9e53bbf4e17?w=500&q=80",
    },
    CatalogFabric {
        name: "Organic Linen",
        kind: FabricKind::Eco,
        properties: ["Strong", "Breathable", "Eco-friendly"],
        sustainability: "Very High",
        image: "https://images.unsplash.com/photo-1585299571304-8d07071924b3?w=500&q=80",
    },
    CatalogFabric {
        name: "Tech Polyester",
        kind: FabricKind::Synthetic,
        properties: ["Water-resistant", "Durable", "Lightweight"],
        sustainability: "Low",
        image: "https://images.unsplash.com/photo-1570579722262-ae269acacef0?w=500&q=80",
    },
    CatalogFabric {
        name: "Recycled Polyester",
        kind: FabricKind::Eco,
        properties: ["Sustainable", "Durable", "Affordable"],
        sustainability: "Very High",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500&q=80",
    },
    CatalogFabric {
        name: "Wool Blend",
        kind: FabricKind::Natural,
        properties: ["Warm", "Elastic", "Long-lasting"],
        sustainability: "High",
        image: "https://images.unsplash.com/photo-1577572112468-c21a56f1cbd3?w=500&q=80",
    },
];

pub fn filtered(filter: FabricFilter) -> impl Iterator<Item = &'static CatalogFabric> {
    CATALOG.iter().filter(move |f| filter.matches(f.kind))
}

#[component]
pub fn FabricLibraryPage() -> impl IntoView {
    let filter = RwSignal::new(FabricFilter::All);

    view! {
        <div class="page fabric-library-page">
            <header class="page-header">
                <p class="eyebrow">"MATERIALS"</p>
                <h1 class="page-title">"Fabric Library"</h1>
                <p class="muted">
                    "Explore premium fabrics analyzed by our AI fabric experts. Find the perfect material for your designs."
                </p>
            </header>

            <Tabs tabs=FabricFilter::TABS.to_vec() active=filter/>

            <div class="card-grid">
                {move || {
                    filtered(filter.get())
                        .map(|fabric| {
                            view! {
                                <article class="card fabric-card">
                                    <img class="fabric-image" src=fabric.image alt=fabric.name/>
                                    <div class="fabric-body">
                                        <div class="fabric-title">
                                            <h3>{fabric.name}</h3>
                                            <span class="pill">{fabric.sustainability}</span>
                                        </div>
                                        <div class="tag-row">
                                            {fabric
                                                .properties
                                                .iter()
                                                .map(|p| view! { <span class="tag">{*p}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <section class="info-grid">
                <div>
                    <p class="strong">"Premium Selection"</p>
                    <p class="muted">"Curated collection of the finest fabrics"</p>
                </div>
                <div>
                    <p class="strong">"AI Analyzed"</p>
                    <p class="muted">"Each fabric analyzed for quality"</p>
                </div>
                <div>
                    <p class="strong">"Sustainable"</p>
                    <p class="muted">"Eco-friendly options available"</p>
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
    fn test_all_shows_whole_catalog() {
        assert_eq!(filtered(FabricFilter::All).count(), CATALOG.len());
    }

    #[test]
    fn test_filter_by_kind() {
        let eco: Vec<_> = filtered(FabricFilter::Only(FabricKind::Eco))
            .map(|f| f.name)
            .collect();
        assert_eq!(eco, vec!["Organic Linen", "Recycled Polyester"]);
        assert_eq!(filtered(FabricFilter::Only(FabricKind::Luxury)).count(), 1);
    }

    #[test]
    fn test_every_kind_has_a_tab() {
        for fabric in &CATALOG {
            assert!(
                FabricFilter::TABS
                    .iter()
                    .any(|(tab, _)| *tab == FabricFilter::Only(fabric.kind))
            );
        }
    }
}

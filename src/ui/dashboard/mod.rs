//! Dashboard shell: sidebar, top bar and the active page.
//!
//! Navigation is a single [`NavKey`] signal shared through [`Navigation`];
//! pages switch by setting it rather than through URLs.

mod nav;
mod sidebar;
mod topbar;

pub use nav::NavKey;
pub use sidebar::Sidebar;
pub use topbar::TopBar;

use leptos::prelude::*;

use crate::ui::auth::use_auth_context;
use crate::ui::pages::{
    ArTryOnPage, BookmarksPage, ColorsPage, DesignGeneratorPage, FabricLibraryPage, FabricPage,
    HomePage, PricingPage, ProfilePage, QuickDesignPage, StylistPage, TrendsPage,
};

/// Active dashboard page
#[derive(Clone, Copy)]
pub struct Navigation {
    pub active: RwSignal<NavKey>,
}

impl Navigation {
    pub fn provide(active: RwSignal<NavKey>) -> Self {
        let nav = Self { active };
        provide_context(nav);
        nav
    }

    pub fn use_context() -> Self {
        expect_context::<Navigation>()
    }

    pub fn go(&self, key: NavKey) {
        self.active.set(key);
    }
}

/// Round avatar: the user's photo, else their initial
#[component]
pub fn UserAvatar(#[prop(default = "avatar")] class: &'static str) -> impl IntoView {
    let auth = use_auth_context();

    move || match auth.user() {
        Some(user) => match user.photo.clone().filter(|p| !p.is_empty()) {
            Some(photo) => view! { <img class=class src=photo alt=user.name.clone()/> }.into_any(),
            None => view! {
                <span class=format!("{class} avatar-placeholder")>{user.initial()}</span>
            }
            .into_any(),
        },
        None => view! { <span class=format!("{class} avatar-placeholder")>"U"</span> }.into_any(),
    }
}

/// Authenticated application frame
#[component]
pub fn Dashboard(active: RwSignal<NavKey>, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let nav = Navigation::provide(active);
    let expanded = RwSignal::new(true);
    let menu_open = RwSignal::new(false);

    // Every navigation closes the user menu.
    Effect::new(move |_| {
        nav.active.track();
        menu_open.set(false);
    });

    view! {
        <div class="dashboard">
            <Sidebar expanded=expanded menu_open=menu_open on_logout=on_logout/>
            <main class="dashboard-main" class:dashboard-main-wide=move || !expanded.get()>
                <TopBar menu_open=menu_open on_logout=on_logout/>
                <div class="dashboard-content">
                    {move || match nav.active.get() {
                        NavKey::Home => view! { <HomePage/> }.into_any(),
                        NavKey::Generator => view! { <DesignGeneratorPage/> }.into_any(),
                        NavKey::Design => view! { <QuickDesignPage/> }.into_any(),
                        NavKey::Trends => view! { <TrendsPage/> }.into_any(),
                        NavKey::FabricAi => view! { <FabricPage/> }.into_any(),
                        NavKey::FabricLibrary => view! { <FabricLibraryPage/> }.into_any(),
                        NavKey::Colors => view! { <ColorsPage/> }.into_any(),
                        NavKey::Stylist => view! { <StylistPage/> }.into_any(),
                        NavKey::Pricing => view! { <PricingPage/> }.into_any(),
                        NavKey::Bookmarks => view! { <BookmarksPage/> }.into_any(),
                        NavKey::ArTryOn => view! { <ArTryOnPage/> }.into_any(),
                        NavKey::Profile => view! { <ProfilePage/> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
    .into_any()
}

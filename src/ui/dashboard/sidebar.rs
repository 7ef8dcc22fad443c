//! Collapsible dashboard sidebar

use leptos::prelude::*;

use super::{NavKey, Navigation, UserAvatar};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Sidebar(
    /// Expanded or collapsed
    expanded: RwSignal<bool>,
    /// Settings toggle shared with the top bar's user menu
    menu_open: RwSignal<bool>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let auth = use_auth_context();
    let nav = Navigation::use_context();

    let user_name = move || auth.user().map(|u| u.name).unwrap_or_default();
    let user_plan = move || {
        auth.user()
            .map(|u| format!("{} Plan", u.plan))
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar" class:sidebar-collapsed=move || !expanded.get()>
            <div class="sidebar-header">
                <Show when=move || expanded.get()>
                    <div class="sidebar-brand">
                        <h1>"VastraVaani"</h1>
                        <p>"Fashion AI"</p>
                    </div>
                </Show>
                <button
                    type="button"
                    class="icon-button"
                    title=move || if expanded.get() { "Collapse" } else { "Expand" }
                    on:click=move |_| expanded.update(|v| *v = !*v)
                >
                    {move || {
                        if expanded.get() {
                            view! { <Icon name=icons::CHEVRON_LEFT/> }.into_any()
                        } else {
                            view! { <Icon name=icons::CHEVRON_RIGHT/> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div class="sidebar-user">
                <UserAvatar class="avatar avatar-md"/>
                <Show when=move || expanded.get()>
                    <p class="sidebar-user-name">{user_name}</p>
                    <p class="sidebar-user-plan">{user_plan}</p>
                    <button
                        type="button"
                        class="btn btn-primary btn-small btn-block"
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        "Settings"
                    </button>
                </Show>
            </div>

            <nav class="sidebar-nav">
                {NavKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <button
                                type="button"
                                class="nav-item"
                                class:nav-item-active=move || nav.active.get() == key
                                title=key.label()
                                on:click=move |_| nav.go(key)
                            >
                                <span class="nav-glyph">{key.glyph()}</span>
                                <Show when=move || expanded.get()>
                                    <span class="nav-label">{key.label()}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <button
                    type="button"
                    class="nav-item nav-item-danger"
                    title="Logout"
                    on:click=move |_| on_logout.run(())
                >
                    <Icon name=icons::LOGOUT/>
                    <Show when=move || expanded.get()>
                        <span class="nav-label">"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

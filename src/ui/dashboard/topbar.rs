use leptos::prelude::*;

use super::{NavKey, Navigation, UserAvatar};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

/// Unread count shown on the bell; there is no notification feed behind it
const NOTIFICATION_BADGE: u32 = 3;

/// Sticky header with the page title, quick search and the user menu
#[component]
pub fn TopBar(menu_open: RwSignal<bool>, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let auth = use_auth_context();
    let nav = Navigation::use_context();
    let search = RwSignal::new(String::new());

    let go_profile = move |_| {
        menu_open.set(false);
        nav.go(NavKey::Profile);
    };

    view! {
        <header class="topbar">
            <h2 class="topbar-title">{move || nav.active.get().label()}</h2>
            <div class="topbar-actions">
                <label class="topbar-search">
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <Icon name=icons::SEARCH class="icon icon-sm"/>
                </label>

                <button type="button" class="icon-button topbar-bell" title="Notifications">
                    <Icon name=icons::BELL/>
                    <span class="badge">{NOTIFICATION_BADGE}</span>
                </button>

                <div class="user-menu">
                    <button
                        type="button"
                        class="user-menu-trigger"
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                    >
                        <UserAvatar class="avatar avatar-sm"/>
                        <span class="user-menu-name">
                            {move || auth.user().map(|u| u.name).unwrap_or_default()}
                        </span>
                        <Icon name=icons::CHEVRON_DOWN class="icon icon-sm"/>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="dropdown">
                            <button type="button" class="dropdown-item" on:click=go_profile>
                                <Icon name=icons::USER class="icon icon-sm"/>
                                "Profile"
                            </button>
                            <button
                                type="button"
                                class="dropdown-item"
                                on:click=move |_| menu_open.set(false)
                            >
                                <Icon name=icons::SETTINGS class="icon icon-sm"/>
                                "Settings"
                            </button>
                            <button
                                type="button"
                                class="dropdown-item dropdown-item-danger"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    on_logout.run(());
                                }
                            >
                                <Icon name=icons::LOGOUT class="icon icon-sm"/>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}

//! Account page: overview, profile editing and static account sections.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::ApiError;
use crate::core::api::auth::{ProfileUpdate, User};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    ErrorMessage, LoadingLabel, LoadingSplash, SuccessMessage, Tabs, TextAreaField, TextField,
};
use crate::ui::dashboard::UserAvatar;

const SAVED_MESSAGE: &str = "Profile updated successfully!";
const SAVED_MESSAGE_MS: u32 = 3000;
const NO_LOCATION: &str = "Location not set";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Overview,
    Edit,
    Security,
    Activity,
}

const TABS: [(ProfileTab, &str); 4] = [
    (ProfileTab::Overview, "overview"),
    (ProfileTab::Edit, "edit"),
    (ProfileTab::Security, "security"),
    (ProfileTab::Activity, "activity"),
];

/// Editable copy of the profile fields
#[derive(Debug, Clone, Copy)]
struct ProfileForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    location: RwSignal<String>,
    company: RwSignal<String>,
    bio: RwSignal<String>,
}

impl ProfileForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            bio: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, user: &User) {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        self.name.set(user.name.clone());
        self.email.set(user.email.clone());
        self.phone.set(text(&user.phone));
        self.location.set(text(&user.location));
        self.company.set(text(&user.company));
        self.bio.set(text(&user.bio));
    }

    fn update(&self) -> ProfileUpdate {
        profile_update(
            &self.name.get_untracked(),
            &self.phone.get_untracked(),
            &self.location.get_untracked(),
            &self.company.get_untracked(),
            &self.bio.get_untracked(),
        )
    }
}

/// Every field is sent so cleared values are cleared on the server too
fn profile_update(name: &str, phone: &str, location: &str, company: &str, bio: &str) -> ProfileUpdate {
    let field = |v: &str| Some(v.trim().to_string());
    ProfileUpdate {
        name: field(name),
        phone: field(phone),
        location: field(location),
        bio: field(bio),
        company: field(company),
    }
}

fn location_text(user: &User) -> String {
    user.location
        .clone()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| NO_LOCATION.to_string())
}

async fn clear_after(message: RwSignal<Option<String>>, ms: u32) {
    #[cfg(not(feature = "ssr"))]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        message.set(None);
    }
    #[cfg(feature = "ssr")]
    let _ = (message, ms);
}

/// Banner text for a failed background refresh. A rejected token already
/// logged the user out, so it gets none.
fn refresh_failure(error: &ApiError) -> Option<String> {
    (!error.is_unauthorized()).then(|| format!("Could not refresh profile: {}", error.user_message()))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth_context();
    let tab = RwSignal::new(ProfileTab::default());
    let edit_mode = RwSignal::new(false);
    let fetching = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let success = RwSignal::new(None::<String>);
    let form = ProfileForm::new();

    // Refresh on mount; the cached user is shown meanwhile.
    Effect::new(move |_| {
        fetching.set(auth.session.with_untracked(Option::is_none));
        spawn_local(async move {
            if let Err(e) = auth.get_profile().await {
                warn!("profile refresh failed: {}", e);
                if let Some(message) = refresh_failure(&e) {
                    auth.error.set(Some(message));
                }
            }
            fetching.set(false);
        });
    });

    Effect::new(move |_| {
        if let Some(user) = auth.user() {
            form.fill(&user);
        }
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = form.update();
        saving.set(true);
        success.set(None);
        spawn_local(async move {
            let result = auth.update_profile(&update).await;
            saving.set(false);
            if result.is_ok() {
                success.set(Some(SAVED_MESSAGE.to_string()));
                edit_mode.set(false);
                clear_after(success, SAVED_MESSAGE_MS).await;
            }
        });
    };

    let show_form = move || edit_mode.get() || tab.get() == ProfileTab::Edit;

    view! {
        <Show
            when=move || !(fetching.get() || auth.loading.get() && auth.user().is_none())
            fallback=|| view! { <LoadingSplash/> }
        >
            <div class="page profile-page">
                <section class="panel profile-header">
                    <div class="profile-avatar">
                        <UserAvatar class="avatar avatar-xl"/>
                        <span class="avatar-badge">"✓"</span>
                    </div>
                    <div class="profile-identity">
                        <h1 class="page-title">{move || auth.user().map(|u| u.name).unwrap_or_default()}</h1>
                        <p class="strong">{move || auth.user().map(|u| u.email).unwrap_or_default()}</p>
                        <p>
                            "Plan: "
                            <strong>{move || auth.user().map(|u| u.plan).unwrap_or_else(|| "Free".to_string())}</strong>
                        </p>
                        <p class="muted small">
                            {move || {
                                auth.user()
                                    .map(|u| location_text(&u))
                                    .unwrap_or_else(|| NO_LOCATION.to_string())
                            }}
                        </p>
                    </div>
                    <button
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| edit_mode.update(|e| *e = !*e)
                    >
                        {move || if edit_mode.get() { "Cancel" } else { "Edit Profile" }}
                    </button>
                </section>

                <SuccessMessage message=success/>
                <ErrorMessage error=auth.error/>

                <Tabs tabs=TABS.to_vec() active=tab/>

                <Show when=move || tab.get() == ProfileTab::Overview && !edit_mode.get()>
                    <Overview/>
                </Show>

                <Show when=show_form>
                    <section class="panel">
                        <h2>"Edit Profile"</h2>
                        <form on:submit=save>
                            <div class="form-grid form-grid-2">
                                <TextField label="Full Name" value=form.name/>
                                <TextField label="Email" value=form.email input_type="email" disabled=true/>
                                <TextField label="Phone" value=form.phone input_type="tel" placeholder="+1 234 567 8900"/>
                                <TextField label="Location" value=form.location placeholder="City, Country"/>
                                <TextField label="Company" value=form.company placeholder="Your Company"/>
                            </div>
                            <TextAreaField label="Bio" value=form.bio placeholder="Tell us about yourself..." rows=4/>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                <LoadingLabel loading=saving idle="Save Changes" busy="Saving..."/>
                            </button>
                        </form>
                    </section>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Security>
                    <section class="panel">
                        <h2>"Security Settings"</h2>
                        <div class="action-list">
                            <button type="button" class="action-item">
                                <span class="strong">"Change Password"</span>
                                <span class="muted small">"Update your password regularly"</span>
                            </button>
                            <button type="button" class="action-item">
                                <span class="strong">"Two-Factor Authentication"</span>
                                <span class="muted small">"Add an extra layer of security"</span>
                            </button>
                            <button type="button" class="action-item">
                                <span class="strong">"Active Sessions"</span>
                                <span class="muted small">"Manage your active login sessions"</span>
                            </button>
                        </div>
                    </section>
                </Show>

                <Show when=move || tab.get() == ProfileTab::Activity>
                    <Activity/>
                </Show>
            </div>
        </Show>
    }
    .into_any()
}

#[component]
fn Overview() -> impl IntoView {
    let auth = use_auth_context();

    let detail = |label: &'static str, value: Signal<String>| {
        view! {
            <div>
                <p class="muted small">{label}</p>
                <p class="strong">{move || value.get()}</p>
            </div>
        }
    };
    let or_dash = |v: Option<String>| v.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| "—".to_string());

    view! {
        <div class="card-grid">
            <div class="card">
                <p class="muted">"Account Status"</p>
                <p class="metric-value">"Active ✓"</p>
                <p class="muted small">
                    {move || {
                        auth.user()
                            .and_then(|u| u.joined())
                            .map(|d| format!("Member since {d}"))
                            .unwrap_or_default()
                    }}
                </p>
            </div>
            <div class="card">
                <p class="muted">"Current Plan"</p>
                <p class="metric-value">{move || auth.user().map(|u| u.plan).unwrap_or_else(|| "Free".to_string())}</p>
                <button type="button" class="btn-link">"Upgrade Plan →"</button>
            </div>
        </div>
        <section class="panel">
            <h2>"Profile Information"</h2>
            <div class="form-grid form-grid-2">
                {detail("Full Name", Signal::derive(move || or_dash(auth.user().map(|u| u.name))))}
                {detail("Email", Signal::derive(move || or_dash(auth.user().map(|u| u.email))))}
                {detail("Location", Signal::derive(move || or_dash(auth.user().and_then(|u| u.location))))}
                {detail("Phone", Signal::derive(move || or_dash(auth.user().and_then(|u| u.phone))))}
            </div>
        </section>
    }
}

#[component]
fn Activity() -> impl IntoView {
    const ENTRIES: [(&str, &str); 3] = [
        ("Login from Chrome", "Today at 9:30 AM"),
        ("Profile Updated", "Yesterday at 2:15 PM"),
        ("Account Created", "When you joined VastraVaani"),
    ];

    view! {
        <section class="panel">
            <h2>"Recent Activity"</h2>
            <ul class="activity-list">
                {ENTRIES
                    .iter()
                    .map(|(what, when)| {
                        view! {
                            <li class="activity-item">
                                <p class="strong">{*what}</p>
                                <p class="muted small">{*when}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(location: Option<&str>) -> User {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Asha",
            "email": "asha@example.com",
            "location": location,
        }))
        .unwrap()
    }

    #[test]
    fn test_profile_update_sends_every_field_trimmed() {
        let update = profile_update(" Asha ", "", "Pune ", "Loom Co", "Designer");
        assert_eq!(update.name.as_deref(), Some("Asha"));
        assert_eq!(update.phone.as_deref(), Some(""));
        assert_eq!(update.location.as_deref(), Some("Pune"));
        assert_eq!(update.company.as_deref(), Some("Loom Co"));
        assert_eq!(update.bio.as_deref(), Some("Designer"));
    }

    #[test]
    fn test_location_placeholder() {
        assert_eq!(location_text(&user(None)), "Location not set");
        assert_eq!(location_text(&user(Some("  "))), "Location not set");
        assert_eq!(location_text(&user(Some("Jaipur"))), "Jaipur");
    }

    #[test]
    fn test_refresh_failure_banner() {
        let rejected = ApiError::Status { status: 401, detail: Some("Invalid token".into()) };
        assert_eq!(refresh_failure(&rejected), None);

        let down = ApiError::Status { status: 503, detail: Some("Database offline".into()) };
        assert_eq!(
            refresh_failure(&down).as_deref(),
            Some("Could not refresh profile: Database offline")
        );
    }

    #[test]
    fn test_tabs_in_display_order() {
        let labels: Vec<_> = TABS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, vec!["overview", "edit", "security", "activity"]);
    }
}

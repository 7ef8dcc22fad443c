use leptos::prelude::*;

/// Inline stroke icon, sized and colored through CSS (`currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icons::path(name)/>
        </svg>
    }
}

pub mod icons {
    pub const SEARCH: &str = "search";
    pub const BELL: &str = "bell";
    pub const LOGOUT: &str = "logout";
    pub const SETTINGS: &str = "settings";
    pub const USER: &str = "user";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const TRASH: &str = "trash";
    pub const UPLOAD: &str = "upload";
    pub const DOWNLOAD: &str = "download";
    pub const SEND: &str = "send";
    pub const LOADER: &str = "loader";

    /// SVG path data for an icon name; unknown names draw a dot
    pub fn path(name: &str) -> &'static str {
        match name {
            SEARCH => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35",
            BELL => "M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9M13.73 21a2 2 0 0 1-3.46 0",
            LOGOUT => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9",
            SETTINGS => "M4 21v-7M4 10V3M12 21v-9M12 8V3M20 21v-5M20 12V3M1 14h6M9 8h6M17 16h6",
            USER => "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            CHEVRON_LEFT => "M15 18l-6-6 6-6",
            CHEVRON_RIGHT => "M9 18l6-6-6-6",
            CHEVRON_DOWN => "M6 9l6 6 6-6",
            ALERT_CIRCLE => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 8v4M12 16h.01",
            CHECK => "M20 6L9 17l-5-5",
            TRASH => {
                "M3 6h18M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6M10 11v6M14 11v6M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"
            }
            UPLOAD => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M17 8l-5-5-5 5M12 3v12",
            DOWNLOAD => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            SEND => "M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z",
            LOADER => {
                "M12 2v4M12 18v4M4.93 4.93l2.83 2.83M16.24 16.24l2.83 2.83M2 12h4M18 12h4M4.93 19.07l2.83-2.83M16.24 7.76l2.83-2.83"
            }
            _ => "M12 12h.01",
        }
    }
}

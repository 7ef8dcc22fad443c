//! Dashboard navigation keys

use derive_more::Display;

/// Page shown in the dashboard content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum NavKey {
    #[default]
    #[display("Home")]
    Home,
    #[display("AI Generator")]
    Generator,
    #[display("Quick Design")]
    Design,
    #[display("Trends")]
    Trends,
    #[display("Fabric AI")]
    FabricAi,
    #[display("Fabric Library")]
    FabricLibrary,
    #[display("Colors")]
    Colors,
    #[display("Stylist")]
    Stylist,
    #[display("Pricing")]
    Pricing,
    #[display("Bookmarks")]
    Bookmarks,
    #[display("AR Try-On")]
    ArTryOn,
    #[display("Profile")]
    Profile,
}

impl NavKey {
    /// Sidebar order
    pub const ALL: [NavKey; 12] = [
        NavKey::Home,
        NavKey::Generator,
        NavKey::Design,
        NavKey::Trends,
        NavKey::FabricAi,
        NavKey::FabricLibrary,
        NavKey::Colors,
        NavKey::Stylist,
        NavKey::Pricing,
        NavKey::Bookmarks,
        NavKey::ArTryOn,
        NavKey::Profile,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NavKey::Home => "home",
            NavKey::Generator => "generator",
            NavKey::Design => "design",
            NavKey::Trends => "trends",
            NavKey::FabricAi => "fabric-ai",
            NavKey::FabricLibrary => "fabric-library",
            NavKey::Colors => "colors",
            NavKey::Stylist => "stylist",
            NavKey::Pricing => "pricing",
            NavKey::Bookmarks => "bookmarks",
            NavKey::ArTryOn => "ar-tryon",
            NavKey::Profile => "profile",
        }
    }

    pub fn label(self) -> String {
        self.to_string()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            NavKey::Home => "🏡",
            NavKey::Generator => "✨",
            NavKey::Design => "✏️",
            NavKey::Trends => "📈",
            NavKey::FabricAi => "🧶",
            NavKey::FabricLibrary => "📚",
            NavKey::Colors => "🎨",
            NavKey::Stylist => "👗",
            NavKey::Pricing => "💰",
            NavKey::Bookmarks => "🔖",
            NavKey::ArTryOn => "👓",
            NavKey::Profile => "👤",
        }
    }

    /// Unknown keys land on Home
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|nav| nav.key() == key)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_round_trip() {
        for nav in NavKey::ALL {
            assert_eq!(NavKey::from_key(nav.key()), nav);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_home() {
        assert_eq!(NavKey::from_key("settings"), NavKey::Home);
        assert_eq!(NavKey::from_key(""), NavKey::Home);
    }

    #[test]
    fn test_keys_and_labels_are_unique() {
        let keys: HashSet<_> = NavKey::ALL.iter().map(|n| n.key()).collect();
        let labels: HashSet<_> = NavKey::ALL.iter().map(|n| n.label()).collect();
        assert_eq!(keys.len(), NavKey::ALL.len());
        assert_eq!(labels.len(), NavKey::ALL.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(NavKey::ArTryOn.label(), "AR Try-On");
        assert_eq!(NavKey::Generator.to_string(), "AI Generator");
        assert_eq!(NavKey::default(), NavKey::Home);
    }
}

//! Backend request/response models
//!
//! Every page talks to the backend under [`API_BASE`]. The modules here only
//! describe payloads and the pure transformations around them; transport lives
//! in `ui::http`.

pub mod auth;
pub mod bookmarks;
pub mod colors;
pub mod design;
pub mod error;
pub mod fabric;
pub mod pricing;
pub mod stylist;
pub mod trends;
pub mod tryon;

pub use error::{ApiError, ApiResult, server_detail};

/// Base path of every backend endpoint, relative to the page origin
pub const API_BASE: &str = "/api";

/// Join an endpoint path onto [`API_BASE`]
pub fn api_url(path: &str) -> String {
    format!("{}/{}", API_BASE, path.trim_start_matches('/'))
}

/// Closed set of choices offered by a select or toggle group.
///
/// `key` is the wire value sent to the backend, `label` the text shown.
pub trait OptionSet: Sized + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str {
        self.key()
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.key() == key)
    }

    /// `(value, label)` pairs in display order
    fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|v| (v.key().to_string(), v.label().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("/auth/login"), "/api/auth/login");
        assert_eq!(api_url("bookmarks/list"), "/api/bookmarks/list");
    }
}

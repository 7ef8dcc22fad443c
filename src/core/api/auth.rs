//! Authentication and profile payloads (`/auth/*`)

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/auth/profile";

/// Account returned by the auth backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default = "default_plan")]
    pub plan: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_plan() -> String {
    "Free".to_string()
}

fn default_active() -> bool {
    true
}

impl User {
    /// First letter of the name, used by avatar placeholders
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }

    /// Join date formatted for display, e.g. "Mar 4, 2025"
    pub fn joined(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_date)
    }
}

/// Format an ISO-8601 timestamp as a short date.
///
/// Accepts both offset-qualified and naive timestamps.
pub fn format_date(raw: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%b %-d, %Y").to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format("%b %-d, %Y").to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Response of both login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// Response of `GET /auth/profile` and `PUT /auth/profile`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// Editable profile fields; absent fields are left unchanged by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ProfileUpdate {
    /// Prefill the edit form from the current user
    pub fn from_user(user: &User) -> Self {
        Self {
            name: Some(user.name.clone()),
            phone: user.phone.clone(),
            location: user.location.clone(),
            bio: user.bio.clone(),
            company: user.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_json() -> &'static str {
        r#"{
            "id": 7,
            "name": "asha rao",
            "email": "asha@example.com",
            "plan": "Pro",
            "location": "Jaipur",
            "phone": null,
            "bio": null,
            "company": "Loom & Co",
            "photo": null,
            "is_active": true,
            "created_at": "2025-03-04T10:15:30.123456",
            "updated_at": "2025-03-05T08:00:00"
        }"#
    }

    #[test]
    fn test_user_deserializes_backend_shape() {
        let user: User = serde_json::from_str(sample_user_json()).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.plan, "Pro");
        assert_eq!(user.company.as_deref(), Some("Loom & Co"));
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_user_defaults_for_missing_fields() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "name": "x", "email": "x@y.z"}"#).unwrap();
        assert_eq!(user.plan, "Free");
        assert!(user.is_active);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_initial() {
        let user: User = serde_json::from_str(sample_user_json()).unwrap();
        assert_eq!(user.initial(), "A");

        let nameless = User {
            name: String::new(),
            ..user
        };
        assert_eq!(nameless.initial(), "U");
    }

    #[test]
    fn test_joined_formats_naive_timestamp() {
        let user: User = serde_json::from_str(sample_user_json()).unwrap();
        assert_eq!(user.joined().as_deref(), Some("Mar 4, 2025"));
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(
            format_date("2024-12-25T00:00:00Z").as_deref(),
            Some("Dec 25, 2024")
        );
        assert_eq!(
            format_date("2024-01-09T23:59:59").as_deref(),
            Some("Jan 9, 2024")
        );
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            name: Some("Asha".to_string()),
            bio: Some("Designer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["bio"], "Designer");
        assert!(json.get("phone").is_none());
        assert!(json.get("company").is_none());
    }

    #[test]
    fn test_auth_response() {
        let body = format!(
            r#"{{"access_token": "tok", "token_type": "bearer", "user": {}}}"#,
            sample_user_json()
        );
        let resp: AuthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.access_token, "tok");
        assert_eq!(resp.user.email, "asha@example.com");
    }
}

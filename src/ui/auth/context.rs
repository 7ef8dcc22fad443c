//! Auth context for managing the user session
//!
//! This module provides a reactive authentication context that:
//! - Restores the session from localStorage after hydration
//! - Handles login, registration and logout
//! - Loads and updates the profile, dropping the session on 401
//! - Mirrors every session change to localStorage

use leptos::logging::log;
#[cfg(not(feature = "ssr"))]
use leptos::logging::{error, warn};
use leptos::prelude::*;

use crate::core::api::ApiError;
use crate::core::api::auth::{
    AuthResponse, LOGIN_PATH, LoginRequest, PROFILE_PATH, ProfileResponse, ProfileUpdate,
    REGISTER_PATH, RegisterRequest, User,
};
use crate::core::session::{self, KeyValueStore, Session};
use crate::ui::http;

/// `localStorage`; silently empty when storage is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage()
            && storage.set_item(key, value).is_err()
        {
            error!("failed to persist {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage()
            && storage.remove_item(key).is_err()
        {
            warn!("failed to clear {}", key);
        }
    }
}

#[cfg(feature = "ssr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Auth context providing the session and auth actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session; token and user are only ever set together
    pub session: RwSignal<Option<Session>>,
    /// True until the stored session has been checked
    pub restoring: RwSignal<bool>,
    /// An auth request is in flight
    pub loading: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

/// Server reason, else the error text, else the action's fallback
fn auth_message(e: &ApiError, fallback: &str) -> String {
    match e.detail() {
        Some(detail) => detail.to_string(),
        None => {
            let text = e.to_string();
            if text.is_empty() { fallback.to_string() } else { text }
        }
    }
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Current user (reactive)
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Uses get_untracked() since this is typically called from event handlers
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    fn start(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    fn establish(&self, response: AuthResponse) -> User {
        let session = Session {
            token: response.access_token,
            user: response.user,
        };
        session::save(&BrowserStorage, &session);
        let user = session.user.clone();
        self.session.set(Some(session));
        user
    }

    async fn authenticate<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<User, String> {
        self.start();
        let result = http::post_json::<_, AuthResponse>(path, body).await;
        self.loading.set(false);

        match result {
            Ok(response) => Ok(self.establish(response)),
            Err(e) => {
                let message = auth_message(&e, fallback);
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, String> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.authenticate(LOGIN_PATH, &body, "Login failed").await
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, String> {
        let body = RegisterRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            name: name.trim().to_string(),
        };
        self.authenticate(REGISTER_PATH, &body, "Registration failed")
            .await
    }

    fn replace_user(&self, user: User) {
        session::save_user(&BrowserStorage, &user);
        self.session.update(|s| {
            if let Some(s) = s {
                s.user = user;
            }
        });
    }

    /// Refresh the user from the server; a 401 ends the session
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let token = self
            .token()
            .ok_or_else(|| ApiError::Request("Not authenticated".to_string()))?;

        match http::get_json::<ProfileResponse>(PROFILE_PATH, &[("token", token.as_str())]).await {
            Ok(response) => {
                self.replace_user(response.user.clone());
                Ok(response.user)
            }
            Err(e) => {
                if e.is_unauthorized() {
                    log!("profile rejected the stored token, logging out");
                    self.logout();
                }
                Err(e)
            }
        }
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, String> {
        let Some(token) = self.token() else {
            return Err("Not authenticated".to_string());
        };

        self.start();
        let result =
            http::put_json::<_, ProfileResponse>(PROFILE_PATH, &[("token", token.as_str())], update).await;
        self.loading.set(false);

        match result {
            Ok(response) => {
                self.replace_user(response.user.clone());
                Ok(response.user)
            }
            Err(e) => {
                let message = auth_message(&e, "Failed to update profile");
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub fn logout(&self) {
        session::clear(&BrowserStorage);
        self.session.set(None);
        self.error.set(None);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start restoring on both server and client to avoid hydration mismatch
    let ctx = AuthContext {
        session: RwSignal::new(None),
        restoring: RwSignal::new(true),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    #[cfg(not(feature = "ssr"))]
    {
        // Runs once after hydration; storage is only readable in the browser.
        Effect::new(move |_| {
            let restored = session::load(&BrowserStorage);
            if restored.is_none() {
                log!("no stored session");
            }
            ctx.session.set(restored);
            ctx.restoring.set(false);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_message_prefers_server_detail() {
        let e = ApiError::from_status(401, r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(auth_message(&e, "Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_auth_message_falls_back_to_error_text() {
        let e = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(
            auth_message(&e, "Login failed"),
            "Request failed with status code 500"
        );

        let e = ApiError::Request(String::new());
        assert_eq!(auth_message(&e, "Registration failed"), "Registration failed");
    }
}

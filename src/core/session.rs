//! Authenticated session and its mirror in browser storage.

use serde::{Deserialize, Serialize};

use crate::core::api::auth::User;

pub const STORAGE_KEY_TOKEN: &str = "vastravaani_token";
pub const STORAGE_KEY_USER: &str = "vastravaani_user";
pub const STORAGE_KEY_REMEMBER_EMAIL: &str = "vastravaani_remember_email";

/// Token and user always travel together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// String key/value storage (`localStorage` in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Rebuild a session from the stored pair; both parts must be usable
pub fn restore(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user = serde_json::from_str::<User>(&user_json?).ok()?;
    Some(Session { token, user })
}

/// Load the session, wiping partial or corrupt leftovers
pub fn load(store: &impl KeyValueStore) -> Option<Session> {
    let session = restore(store.get(STORAGE_KEY_TOKEN), store.get(STORAGE_KEY_USER));
    if session.is_none() {
        clear(store);
    }
    session
}

pub fn save(store: &impl KeyValueStore, session: &Session) {
    store.set(STORAGE_KEY_TOKEN, &session.token);
    save_user(store, &session.user);
}

pub fn save_user(store: &impl KeyValueStore, user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => store.set(STORAGE_KEY_USER, &json),
        Err(_) => store.remove(STORAGE_KEY_USER),
    }
}

pub fn clear(store: &impl KeyValueStore) {
    store.remove(STORAGE_KEY_TOKEN);
    store.remove(STORAGE_KEY_USER);
}

pub fn remembered_email(store: &impl KeyValueStore) -> Option<String> {
    store
        .get(STORAGE_KEY_REMEMBER_EMAIL)
        .filter(|e| !e.is_empty())
}

pub fn remember_email(store: &impl KeyValueStore, email: Option<&str>) {
    match email {
        Some(email) => store.set(STORAGE_KEY_REMEMBER_EMAIL, email),
        None => store.remove(STORAGE_KEY_REMEMBER_EMAIL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    const USER_JSON: &str =
        r#"{"id": 7, "name": "Meera", "email": "meera@example.com", "plan": "Pro"}"#;

    #[test]
    fn test_restore_requires_both_parts() {
        assert!(restore(Some("t".into()), Some(USER_JSON.into())).is_some());
        assert!(restore(None, Some(USER_JSON.into())).is_none());
        assert!(restore(Some("t".into()), None).is_none());
        assert!(restore(Some(String::new()), Some(USER_JSON.into())).is_none());
        assert!(restore(Some("t".into()), Some("{not json".into())).is_none());
    }

    #[test]
    fn test_load_clears_partial_state() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_USER, USER_JSON);

        assert!(load(&store).is_none());
        assert!(store.get(STORAGE_KEY_USER).is_none());
        assert!(store.get(STORAGE_KEY_TOKEN).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        let user: User = serde_json::from_str(USER_JSON).unwrap();
        let session = Session {
            token: "abc".to_string(),
            user,
        };
        save(&store, &session);

        let loaded = load(&store).unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.user.plan, "Pro");

        clear(&store);
        assert!(load(&store).is_none());
    }

    #[test]
    fn test_remembered_email() {
        let store = MemoryStore::default();
        assert_eq!(remembered_email(&store), None);

        remember_email(&store, Some("meera@example.com"));
        assert_eq!(remembered_email(&store).as_deref(), Some("meera@example.com"));

        remember_email(&store, None);
        assert_eq!(remembered_email(&store), None);
    }

    #[test]
    fn test_clear_keeps_remembered_email() {
        let store = MemoryStore::default();
        remember_email(&store, Some("meera@example.com"));
        store.set(STORAGE_KEY_TOKEN, "abc");
        clear(&store);
        assert!(remembered_email(&store).is_some());
    }
}

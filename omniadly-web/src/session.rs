//! Session persistence in `localStorage`.

use gloo_storage::{LocalStorage, Storage};
use shared::auth::SessionStore;
use shared::models::AdminUser;
use tracing::warn;

pub const ACCESS_TOKEN_KEY: &str = "admin_access_token";
pub const REFRESH_TOKEN_KEY: &str = "admin_refresh_token";
pub const USER_KEY: &str = "admin_user";
/// Profile the API scopes brand requests to, sent as `X-Profile-Id`.
pub const ACTIVE_PROFILE_KEY: &str = "activeProfileId";

/// [`SessionStore`] over the browser's local storage, shared by every tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn read(key: &str) -> Option<String> {
        LocalStorage::get::<String>(key)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn write<T: serde::Serialize>(key: &str, value: T) {
        if let Err(err) = LocalStorage::set(key, value) {
            warn!(key, error = %err, "failed to persist session value");
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn access_token(&self) -> Option<String> {
        Self::read(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::read(REFRESH_TOKEN_KEY)
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        Self::write(ACCESS_TOKEN_KEY, access_token);
        Self::write(REFRESH_TOKEN_KEY, refresh_token);
    }

    fn user(&self) -> Option<AdminUser> {
        LocalStorage::get(USER_KEY).ok()
    }

    fn set_user(&self, user: &AdminUser) {
        Self::write(USER_KEY, user);
    }

    fn clear_auth(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

pub fn active_profile_id() -> Option<String> {
    BrowserSessionStore::read(ACTIVE_PROFILE_KEY)
}

pub fn set_active_profile_id(profile_id: Option<&str>) {
    match profile_id {
        Some(profile_id) => BrowserSessionStore::write(ACTIVE_PROFILE_KEY, profile_id),
        None => LocalStorage::delete(ACTIVE_PROFILE_KEY),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::Role;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_and_clear() {
        let store = BrowserSessionStore;
        store.clear_auth();
        assert!(!store.is_authenticated());

        store.set_tokens("access", "refresh");
        store.set_user(&AdminUser {
            id: "1".into(),
            email: "root@omniadly.io".into(),
            role: Role::Admin,
            full_name: None,
        });
        assert!(store.is_authenticated());
        assert_eq!(store.refresh_token().as_deref(), Some("refresh"));
        assert!(store.user().is_some_and(|user| user.role.is_admin()));

        store.clear_auth();
        assert!(store.access_token().is_none());
        assert!(store.user().is_none());
    }

    #[wasm_bindgen_test]
    fn test_active_profile() {
        set_active_profile_id(Some("pr-1"));
        assert_eq!(active_profile_id().as_deref(), Some("pr-1"));
        set_active_profile_id(None);
        assert!(active_profile_id().is_none());
    }
}

use std::cell::RefCell;

use crate::models::AdminUser;

/// Persisted holder of the admin session.
///
/// A stored access token only means a login happened at some point. Whether it
/// is still good is decided by the server each time the gate runs.
pub trait SessionStore {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    fn set_tokens(&self, access_token: &str, refresh_token: &str);

    /// Last admin confirmed by the server, if any.
    fn user(&self) -> Option<AdminUser>;

    fn set_user(&self, user: &AdminUser);

    /// Drop tokens and cached user together.
    fn clear_auth(&self);

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some_and(|token| !token.is_empty())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct SessionData {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AdminUser>,
}

/// Session store kept in memory. Used by tests and as a fallback when browser
/// storage is unavailable.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    data: RefCell<SessionData>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an access token.
    pub fn with_token(access_token: &str) -> Self {
        let store = Self::new();
        store.set_tokens(access_token, "");
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.data.borrow().access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.data.borrow().refresh_token.clone()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        let mut data = self.data.borrow_mut();
        data.access_token = Some(access_token.to_string());
        data.refresh_token = Some(refresh_token.to_string());
    }

    fn user(&self) -> Option<AdminUser> {
        self.data.borrow().user.clone()
    }

    fn set_user(&self, user: &AdminUser) {
        self.data.borrow_mut().user = Some(user.clone());
    }

    fn clear_auth(&self) {
        *self.data.borrow_mut() = SessionData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_empty_store_is_not_authenticated() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());
        store.set_tokens("", "");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_drops_everything() {
        let store = MemorySessionStore::with_token("access");
        store.set_user(&AdminUser {
            id: "1".into(),
            email: "root@omniadly.io".into(),
            role: Role::Admin,
            full_name: None,
        });
        assert!(store.is_authenticated());
        assert!(store.user().is_some());

        store.clear_auth();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.refresh_token().is_none());
    }
}

//! Tests for the login page's session check
//!
//! Drives `settle_login_check` over in-memory collaborators, outside the
//! browser.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;
    use shared::auth::{AuthBackend, AuthGate, MemorySessionStore, NoticeLevel, Notifier, Redirector};
    use shared::models::{AdminUser, LoginRequest, LoginResponse, Role};
    use shared::{ApiError, ApiResult};

    use crate::hooks::settle_login_check;

    struct Profile(ApiResult<AdminUser>);

    #[async_trait(?Send)]
    impl AuthBackend for Profile {
        async fn current_profile(&self) -> ApiResult<AdminUser> {
            self.0.clone()
        }

        async fn login(&self, _request: &LoginRequest) -> ApiResult<LoginResponse> {
            Err(ApiError::Network("login not stubbed".to_string()))
        }
    }

    #[derive(Default)]
    struct Paths(RefCell<Vec<String>>);

    impl Redirector for Paths {
        fn redirect(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _message: &str, _level: NoticeLevel) {}
    }

    fn user(role: Role) -> AdminUser {
        AdminUser {
            id: "6f1c2a".to_string(),
            email: "root@omniadly.io".to_string(),
            role,
            full_name: None,
        }
    }

    fn gate(session: MemorySessionStore, profile: ApiResult<AdminUser>) -> (AuthGate, Rc<Paths>) {
        let paths = Rc::new(Paths::default());
        let gate = AuthGate::new(
            Rc::new(session),
            Rc::new(Profile(profile)),
            paths.clone(),
            Rc::new(Silent),
        );
        (gate, paths)
    }

    /// Tests that the form is released when there is no stored session
    #[tokio::test]
    async fn test_check_settles_without_session() {
        let (gate, paths) = gate(MemorySessionStore::new(), Ok(user(Role::Admin)));
        let checking = Cell::new(true);

        settle_login_check(&gate, &|| true, |value| checking.set(value)).await;

        assert!(!checking.get());
        assert!(paths.0.borrow().is_empty());
    }

    /// Tests that a non-admin session falls through to the form
    #[tokio::test]
    async fn test_check_settles_for_non_admin_session() {
        let (gate, paths) = gate(MemorySessionStore::with_token("token"), Ok(user(Role::Customer)));
        let checking = Cell::new(true);

        settle_login_check(&gate, &|| true, |value| checking.set(value)).await;

        assert!(!checking.get());
        assert!(paths.0.borrow().is_empty());
    }

    /// Tests that an unreachable server also falls through to the form
    #[tokio::test]
    async fn test_check_settles_when_profile_fails() {
        let (gate, _) = gate(
            MemorySessionStore::with_token("token"),
            Err(ApiError::Network("offline".to_string())),
        );
        let checking = Cell::new(true);

        settle_login_check(&gate, &|| true, |value| checking.set(value)).await;

        assert!(!checking.get());
    }

    /// Tests that an admin session is sent on to the dashboard
    #[tokio::test]
    async fn test_admin_session_redirects() {
        let (gate, paths) = gate(MemorySessionStore::with_token("token"), Ok(user(Role::Admin)));
        let checking = Cell::new(true);

        settle_login_check(&gate, &|| true, |value| checking.set(value)).await;

        assert_eq!(paths.0.borrow().as_slice(), ["/"]);
    }

    /// Tests that nothing is reported after the page unmounts
    #[tokio::test]
    async fn test_unmounted_page_is_left_alone() {
        let (gate, paths) = gate(MemorySessionStore::with_token("token"), Ok(user(Role::Admin)));
        let checking = Cell::new(true);

        settle_login_check(&gate, &|| false, |value| checking.set(value)).await;

        assert!(checking.get());
        assert!(paths.0.borrow().is_empty());
    }
}

//! In-memory collaborators for exercising the gate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use super::*;
use crate::errors::{ApiError, ApiResult};
use crate::models::{AdminUser, LoginRequest, LoginResponse, Role};

pub fn admin_user(role: Role) -> AdminUser {
    AdminUser {
        id: "6f1c2a".to_string(),
        email: "root@omniadly.io".to_string(),
        role,
        full_name: Some("Root Admin".to_string()),
    }
}

/// Backend answering every call with canned results.
#[derive(Debug)]
pub struct FakeBackend {
    pub profile: ApiResult<AdminUser>,
    pub login: ApiResult<LoginResponse>,
    pub profile_calls: Cell<usize>,
    pub login_calls: Cell<usize>,
}

impl FakeBackend {
    pub fn with_profile(profile: ApiResult<AdminUser>) -> Self {
        Self {
            profile,
            login: Err(ApiError::Network("login not stubbed".to_string())),
            profile_calls: Cell::new(0),
            login_calls: Cell::new(0),
        }
    }

    pub fn with_login(login: ApiResult<LoginResponse>) -> Self {
        Self {
            login,
            ..Self::with_profile(Err(ApiError::Network("profile not stubbed".to_string())))
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn current_profile(&self) -> ApiResult<AdminUser> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login.clone()
    }
}

#[derive(Debug, Default)]
pub struct RecordingRedirector {
    pub paths: RefCell<Vec<String>>,
}

impl Redirector for RecordingRedirector {
    fn redirect(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(String, NoticeLevel)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notices.borrow_mut().push((message.to_string(), level));
    }
}

/// A gate wired to fakes, with handles kept for assertions.
#[derive(Debug)]
pub struct Harness {
    pub session: Rc<MemorySessionStore>,
    pub backend: Rc<FakeBackend>,
    pub redirector: Rc<RecordingRedirector>,
    pub notifier: Rc<RecordingNotifier>,
    pub gate: AuthGate,
}

impl Harness {
    pub fn new(session: MemorySessionStore, backend: FakeBackend) -> Self {
        let session = Rc::new(session);
        let backend = Rc::new(backend);
        let redirector = Rc::new(RecordingRedirector::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let gate = AuthGate::new(
            session.clone(),
            backend.clone(),
            redirector.clone(),
            notifier.clone(),
        );
        Self {
            session,
            backend,
            redirector,
            notifier,
            gate,
        }
    }

    /// Signed-in session whose profile fetch returns `profile`.
    pub fn signed_in(profile: ApiResult<AdminUser>) -> Self {
        Self::new(
            MemorySessionStore::with_token("access-token"),
            FakeBackend::with_profile(profile),
        )
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirector.paths.borrow().clone()
    }

    pub fn notices(&self) -> Vec<(String, NoticeLevel)> {
        self.notifier.notices.borrow().clone()
    }
}

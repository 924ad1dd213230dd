use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::credentials::{ValidationError, validate_credentials};
use super::ports::{AuthBackend, Liveness, NoticeLevel, Notifier, Redirector};
use super::session::SessionStore;
use crate::errors::ApiError;
use crate::models::{AdminUser, LoginRequest, Role};

pub const ACCESS_DENIED: &str = "Access denied. Admin privileges required.";
pub const VERIFY_FAILED: &str = "Failed to verify admin privileges.";
pub const LOGGED_OUT: &str = "Logged out successfully";

/// Why the gate refused to let a view render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("no session")]
    NoSession,
    #[error("could not load the current profile: {0}")]
    ProfileFetchFailed(ApiError),
    #[error("role {0} is not allowed in the admin dashboard")]
    RoleMismatch(Role),
    /// The view went away before the profile fetch resolved.
    #[error("view unmounted before the check completed")]
    Unmounted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Access denied. Admin privileges required.")]
    AccessDenied,
}

/// Paths the gate navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRoutes {
    pub login: String,
    pub dashboard: String,
}

impl Default for GateRoutes {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_string(),
            dashboard: "/".to_string(),
        }
    }
}

/// What a gated view sees while and after the check runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    pub is_loading: bool,
    pub is_admin: bool,
    pub user: Option<AdminUser>,
}

impl GateState {
    /// State on mount, before the check has resolved.
    pub const fn pending() -> Self {
        Self {
            is_loading: true,
            is_admin: false,
            user: None,
        }
    }

    pub fn from_outcome(outcome: &Result<AdminUser, GateError>) -> Self {
        match outcome {
            Ok(user) => Self {
                is_loading: false,
                is_admin: true,
                user: Some(user.clone()),
            },
            Err(_) => Self {
                is_loading: false,
                is_admin: false,
                user: None,
            },
        }
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Guards admin-only views behind a stored session and a server-confirmed
/// admin role.
#[derive(Clone)]
pub struct AuthGate {
    session: Rc<dyn SessionStore>,
    backend: Rc<dyn AuthBackend>,
    redirector: Rc<dyn Redirector>,
    notifier: Rc<dyn Notifier>,
    routes: GateRoutes,
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl AuthGate {
    pub fn new(
        session: Rc<dyn SessionStore>,
        backend: Rc<dyn AuthBackend>,
        redirector: Rc<dyn Redirector>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            backend,
            redirector,
            notifier,
            routes: GateRoutes::default(),
        }
    }

    #[must_use]
    pub fn with_routes(mut self, routes: GateRoutes) -> Self {
        self.routes = routes;
        self
    }

    pub const fn routes(&self) -> &GateRoutes {
        &self.routes
    }

    fn reject(&self, message: &str) {
        self.notifier.notify(message, NoticeLevel::Error);
        self.session.clear_auth();
        self.redirector.redirect(&self.routes.login);
    }

    /// Confirm that the session belongs to an admin.
    ///
    /// Without a token the view is sent to the login route silently. Any
    /// failure after the profile fetch clears the session, shows one error
    /// notice and redirects to login. When `alive` reports the view gone by
    /// the time the fetch resolves, nothing is touched.
    ///
    /// # Errors
    /// The [`GateError`] that kept the view closed.
    pub async fn check_admin_access<L>(&self, alive: &L) -> Result<AdminUser, GateError>
    where
        L: Liveness + ?Sized,
    {
        if !self.session.is_authenticated() {
            debug!(path = %self.routes.login, "no session, redirecting");
            self.redirector.redirect(&self.routes.login);
            return Err(GateError::NoSession);
        }

        let profile = self.backend.current_profile().await;
        if !alive.is_alive() {
            debug!("view unmounted during admin check");
            return Err(GateError::Unmounted);
        }

        match profile {
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "role check failed");
                self.reject(VERIFY_FAILED);
                Err(GateError::ProfileFetchFailed(err))
            }
            Ok(user) if !user.role.is_admin() => {
                warn!(user_id = %user.id, role = %user.role, "non-admin session rejected");
                self.reject(ACCESS_DENIED);
                Err(GateError::RoleMismatch(user.role))
            }
            Ok(user) => {
                debug!(user_id = %user.id, "admin confirmed");
                self.session.set_user(&user);
                Ok(user)
            }
        }
    }

    /// Login page helper: send an already signed-in admin to the dashboard.
    ///
    /// Never clears the session or notifies; any failure just leaves the
    /// login form visible. Returns whether a redirect happened.
    pub async fn redirect_if_authenticated<L>(&self, alive: &L) -> bool
    where
        L: Liveness + ?Sized,
    {
        if !self.session.is_authenticated() {
            return false;
        }

        let profile = self.backend.current_profile().await;
        if !alive.is_alive() {
            return false;
        }

        match profile {
            Ok(user) if user.role.is_admin() => {
                debug!(user_id = %user.id, "already signed in");
                self.redirector.redirect(&self.routes.dashboard);
                true
            }
            Ok(_) => false,
            Err(err) => {
                debug!(error = %err, "stored session not usable, showing login form");
                false
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// Tokens are stored as soon as the server accepts the credentials. A
    /// non-admin account is signed straight back out.
    ///
    /// # Errors
    /// [`LoginError::Validation`] before any request is made,
    /// [`LoginError::Api`] when the server refuses, and
    /// [`LoginError::AccessDenied`] for non-admin accounts.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<AdminUser, LoginError> {
        validate_credentials(&request.email, &request.password)?;

        let response = match self.backend.login(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "login failed");
                self.notifier.notify(&err.to_string(), NoticeLevel::Error);
                return Err(err.into());
            }
        };

        self.session
            .set_tokens(&response.access_token, &response.refresh_token);

        let user = response.user;
        if !user.role.is_admin() {
            warn!(user_id = %user.id, role = %user.role, "non-admin login rejected");
            self.notifier.notify(ACCESS_DENIED, NoticeLevel::Error);
            self.session.clear_auth();
            return Err(LoginError::AccessDenied);
        }

        info!(user_id = %user.id, "admin signed in");
        self.session.set_user(&user);
        self.notifier.notify(
            &format!("Welcome back, {}!", user.display_name()),
            NoticeLevel::Success,
        );
        self.redirector.redirect(&self.routes.dashboard);
        Ok(user)
    }

    /// Drop the session and return to the login page.
    pub fn sign_out(&self) {
        info!("admin signed out");
        self.session.clear_auth();
        self.notifier.notify(LOGGED_OUT, NoticeLevel::Success);
        self.redirector.redirect(&self.routes.login);
    }
}

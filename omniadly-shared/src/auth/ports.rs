//! Collaborators the gate drives. The browser build wires these to
//! `reqwest`, the router and the toast store; tests use in-memory fakes.

use async_trait::async_trait;

use crate::errors::ApiResult;
use crate::models::{AdminUser, LoginRequest, LoginResponse};

/// Remote side of authentication.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// `GET /users/profile/me` for the current access token.
    ///
    /// # Errors
    /// Any transport, HTTP or decoding failure.
    async fn current_profile(&self) -> ApiResult<AdminUser>;

    /// `POST /auth/login`.
    ///
    /// # Errors
    /// Any transport, HTTP or decoding failure, or a rejected envelope.
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
}

/// Navigation primitive.
pub trait Redirector {
    fn redirect(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// User-visible notification primitive.
pub trait Notifier {
    fn notify(&self, message: &str, level: NoticeLevel);
}

/// Reports whether the view that started an async check is still mounted.
pub trait Liveness {
    fn is_alive(&self) -> bool;
}

impl<F> Liveness for F
where
    F: Fn() -> bool + ?Sized,
{
    fn is_alive(&self) -> bool {
        self()
    }
}

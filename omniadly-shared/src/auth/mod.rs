//! Admin session gate.
//!
//! Every dashboard view runs [`AuthGate::check_admin_access`] on mount and
//! renders nothing until it resolves. The login page runs the gentler
//! [`AuthGate::redirect_if_authenticated`] instead.

pub mod credentials;
pub mod gate;
pub mod ports;
pub mod session;

#[cfg(test)]
pub mod test_implementations;

pub use credentials::{ValidationError, validate_credentials, validate_email, validate_password};
pub use gate::{
    ACCESS_DENIED, AuthGate, GateError, GateRoutes, GateState, LOGGED_OUT, LoginError,
    VERIFY_FAILED,
};
pub use ports::{AuthBackend, Liveness, NoticeLevel, Notifier, Redirector};
pub use session::{MemorySessionStore, SessionStore};

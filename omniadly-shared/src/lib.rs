//! Platform-neutral core of the OmniAdly admin dashboard.
//!
//! Everything here runs natively as well as in the browser: the REST models,
//! the admin session gate, and the client-side table state machine that the
//! Yew views render.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod endpoints;
pub mod errors;
pub mod format;
pub mod models;
pub mod table;

pub use errors::{ApiError, ApiResult};

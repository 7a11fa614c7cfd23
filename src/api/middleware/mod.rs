//! HTTP middleware and request-scoped authentication.

pub mod auth;

pub use auth::CurrentUser;

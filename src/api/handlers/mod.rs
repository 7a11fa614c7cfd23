//! HTTP request handlers.

pub mod auth_handler;
pub mod follow_handler;
pub mod user_handler;

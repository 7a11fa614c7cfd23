//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod access_token;
pub mod follow;
pub mod user;

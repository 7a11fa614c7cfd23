//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over SeaORM entities
//! - Unit of Work for centralized repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    FollowRepository, FollowStore, NewUserRecord, TokenRepository, TokenStore, UserRepository,
    UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(feature = "test-utils")]
pub use repositories::{MockFollowRepository, MockTokenRepository, MockUserRepository};

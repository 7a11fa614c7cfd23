//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod follow_repository;
mod token_repository;
mod user_repository;

pub use follow_repository::{FollowRepository, FollowStore};
pub use token_repository::{TokenRepository, TokenStore};
pub use user_repository::{NewUserRecord, UserRepository, UserStore};

// Export mocks for integration tests
#[cfg(feature = "test-utils")]
pub use follow_repository::MockFollowRepository;
#[cfg(feature = "test-utils")]
pub use token_repository::MockTokenRepository;
#[cfg(feature = "test-utils")]
pub use user_repository::MockUserRepository;

//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and receive the acting user's id as an explicit
//! parameter on every authorization-sensitive call.

mod auth_service;
pub mod container;
mod follow_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, LOGGED_OUT};
pub use follow_service::{
    FollowManager, FollowService, FOLLOWER_REMOVED, FOLLOW_CREATED, FOLLOW_STOPPED,
};
pub use user_service::{UserManager, UserService, USER_DELETED};

#[cfg(feature = "test-utils")]
pub use container::MockServiceContainer;

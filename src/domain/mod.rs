//! Domain layer - Core business entities and logic
//!
//! Contains the entities and value objects of the system, independent of
//! infrastructure concerns: users, follow edges, and password handling.

pub mod follow;
pub mod password;
pub mod user;

pub use follow::Follow;
pub use password::Password;
pub use user::{NewUser, User, UserChanges, UserResponse};

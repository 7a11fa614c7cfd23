//! Application state - Dependency injection container for the HTTP layer.

use std::sync::Arc;

use crate::services::{AuthService, FollowService, Services, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Follow service
    pub follow_service: Arc<dyn FollowService>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(db: sea_orm::DatabaseConnection, config: crate::config::Config) -> Self {
        use crate::services::ServiceContainer;

        let container = Services::from_connection(db, config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            follow_service: container.follows(),
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        follow_service: Arc<dyn FollowService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            follow_service,
        }
    }
}

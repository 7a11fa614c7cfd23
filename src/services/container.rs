//! Service Container - centralized service construction and access.

use std::sync::Arc;

use super::{AuthService, FollowService, UserService};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(feature = "test-utils")]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(feature = "test-utils", automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get follow service
    fn follows(&self) -> Arc<dyn FollowService>;
}

/// Concrete implementation of [`ServiceContainer`]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    follow_service: Arc<dyn FollowService>,
}

impl Services {
    /// Create a new service container with pre-built services
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

    /// Create service container from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, FollowManager, UserManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let user_service = Arc::new(UserManager::new(uow.clone()));
        let follow_service = Arc::new(FollowManager::new(uow));

        Self {
            auth_service,
            user_service,
            follow_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn follows(&self) -> Arc<dyn FollowService> {
        self.follow_service.clone()
    }
}

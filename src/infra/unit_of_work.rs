//! Unit of Work - centralized repository access.
//!
//! Services receive one handle to all repositories instead of individual
//! store instances. Cross-repository consistency (duplicate edges under
//! concurrent requests, dangling edges after a user delete) is guaranteed
//! by the schema itself: the unique composite index on follows and the
//! cascading foreign keys.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    FollowRepository, FollowStore, TokenRepository, TokenStore, UserRepository, UserStore,
};

/// Repository access for services.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get follow repository
    fn follows(&self) -> Arc<dyn FollowRepository>;

    /// Get access token repository
    fn tokens(&self) -> Arc<dyn TokenRepository>;
}

/// Concrete implementation of [`UnitOfWork`] over one database connection
pub struct Persistence {
    user_repo: Arc<UserStore>,
    follow_repo: Arc<FollowStore>,
    token_repo: Arc<TokenStore>,
}

impl Persistence {
    /// Create a new unit of work sharing a single connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            follow_repo: Arc::new(FollowStore::new(db.clone())),
            token_repo: Arc::new(TokenStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn follows(&self) -> Arc<dyn FollowRepository> {
        self.follow_repo.clone()
    }

    fn tokens(&self) -> Arc<dyn TokenRepository> {
        self.token_repo.clone()
    }
}

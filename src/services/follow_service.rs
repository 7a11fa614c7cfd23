//! Follow service - rules around the directed follow graph.
//!
//! Every operation starts from an existence check on the referenced user.
//! Edge ownership is role-scoped: the follower may sever its own outbound
//! edge (`stop_following`), the followed party may drop an inbound edge
//! (`remove_follower`), and nobody else can touch it.
//!
//! Self-follows are not rejected on creation, matching the reference
//! behavior; the listing queries exclude the self-edge instead.

use async_trait::async_trait;
use sea_orm::SqlErr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PageQuery;

use super::user_service::USER_NOT_FOUND;

pub(crate) const ALREADY_FOLLOWING: &str = "You already follow this user.";
pub(crate) const NOT_A_FOLLOWER: &str = "This user doesn't follow you.";
pub(crate) const NOT_FOLLOWING: &str = "You don't follow this user.";

/// Message confirming a new follow edge
pub const FOLLOW_CREATED: &str = "User successfully followed.";
/// Message confirming an inbound edge removal
pub const FOLLOWER_REMOVED: &str = "The informed user is not your follower anymore.";
/// Message confirming an outbound edge removal
pub const FOLLOW_STOPPED: &str = "The informed user is not followed by you anymore.";

/// Follow service trait for dependency injection.
#[async_trait]
pub trait FollowService: Send + Sync {
    /// Create the edge (acting user -> target)
    async fn create_follow(&self, target_user_id: Uuid, acting_user_id: Uuid) -> AppResult<()>;

    /// Page of users following `user_id`
    async fn get_followers(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>>;

    /// Page of users that `user_id` follows
    async fn get_followed(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>>;

    /// Delete the edge (follower -> acting user); invoked by the followed party
    async fn remove_follower(&self, follower_user_id: Uuid, acting_user_id: Uuid)
        -> AppResult<()>;

    /// Delete the edge (acting user -> target); invoked by the follower
    async fn stop_following(&self, target_user_id: Uuid, acting_user_id: Uuid) -> AppResult<()>;
}

/// True when a failed edge insert lost the race against an identical
/// request and hit the unique composite index.
fn is_duplicate_edge(sql_err: Option<SqlErr>) -> bool {
    matches!(sql_err, Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Concrete implementation of [`FollowService`] using Unit of Work.
pub struct FollowManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FollowManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_user(&self, user_id: Uuid) -> AppResult<()> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    async fn edge_exists(&self, follower: Uuid, followed: Uuid) -> AppResult<bool> {
        Ok(self.uow.follows().find_pair(follower, followed).await?.is_some())
    }
}

#[async_trait]
impl<U: UnitOfWork> FollowService for FollowManager<U> {
    async fn create_follow(&self, target_user_id: Uuid, acting_user_id: Uuid) -> AppResult<()> {
        self.require_user(target_user_id).await?;

        if self.edge_exists(acting_user_id, target_user_id).await? {
            return Err(AppError::forbidden(ALREADY_FOLLOWING));
        }

        // Two identical requests can both pass the check above; the unique
        // composite index rejects the loser, which gets the same answer as
        // if the check had caught it.
        match self.uow.follows().create(acting_user_id, target_user_id).await {
            Ok(_) => Ok(()),
            Err(AppError::Database(e)) if is_duplicate_edge(e.sql_err()) => {
                Err(AppError::forbidden(ALREADY_FOLLOWING))
            }
            Err(e) => Err(e),
        }
    }

    async fn get_followers(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>> {
        self.require_user(user_id).await?;

        self.uow.follows().followers(user_id, page).await
    }

    async fn get_followed(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>> {
        self.require_user(user_id).await?;

        self.uow.follows().followed(user_id, page).await
    }

    async fn remove_follower(
        &self,
        follower_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> AppResult<()> {
        self.require_user(follower_user_id).await?;

        if !self.edge_exists(follower_user_id, acting_user_id).await? {
            return Err(AppError::bad_request(NOT_A_FOLLOWER));
        }

        self.uow
            .follows()
            .delete_pair(follower_user_id, acting_user_id)
            .await
    }

    async fn stop_following(&self, target_user_id: Uuid, acting_user_id: Uuid) -> AppResult<()> {
        self.require_user(target_user_id).await?;

        if !self.edge_exists(acting_user_id, target_user_id).await? {
            return Err(AppError::bad_request(NOT_FOLLOWING));
        }

        self.uow
            .follows()
            .delete_pair(acting_user_id, target_user_id)
            .await
    }
}

//! Follow repository - persistence operations for the follow graph.
//!
//! Edge lookups are point queries against the unique composite index on
//! (follower_user_id, followed_user_id); listings are offset/limit windows
//! ordered by edge insertion time.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

#[cfg(feature = "test-utils")]
use mockall::automock;

use super::entities::{
    follow::{self, ActiveModel, Entity as FollowEntity},
    user::{self, Entity as UserEntity},
};
use crate::config::FOLLOW_PAGE_SIZE;
use crate::domain::{Follow, User};
use crate::errors::{AppError, AppResult};
use crate::types::PageQuery;

/// Follow graph persistence operations
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a directed edge. Fails with a unique-violation database
    /// error if the ordered pair already exists.
    async fn create(&self, follower_user_id: Uuid, followed_user_id: Uuid) -> AppResult<Follow>;

    /// Point lookup of the edge for an ordered pair
    async fn find_pair(
        &self,
        follower_user_id: Uuid,
        followed_user_id: Uuid,
    ) -> AppResult<Option<Follow>>;

    /// Page of users following `user_id`, self-edge excluded
    async fn followers(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>>;

    /// Page of users that `user_id` follows, self-edge excluded
    async fn followed(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>>;

    /// Delete the edge for an ordered pair
    async fn delete_pair(&self, follower_user_id: Uuid, followed_user_id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`FollowRepository`]
pub struct FollowStore {
    db: DatabaseConnection,
}

impl FollowStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the user records for a page of edges, preserving edge order.
    async fn users_in_order(&self, ids: Vec<Uuid>) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let mut by_id: HashMap<Uuid, user::Model> =
            models.into_iter().map(|m| (m.id, m)).collect();

        Ok(ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .map(User::from)
            .collect())
    }
}

#[async_trait]
impl FollowRepository for FollowStore {
    async fn create(&self, follower_user_id: Uuid, followed_user_id: Uuid) -> AppResult<Follow> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            follower_user_id: Set(follower_user_id),
            followed_user_id: Set(followed_user_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(Follow::from(model))
    }

    async fn find_pair(
        &self,
        follower_user_id: Uuid,
        followed_user_id: Uuid,
    ) -> AppResult<Option<Follow>> {
        let result = FollowEntity::find()
            .filter(follow::Column::FollowerUserId.eq(follower_user_id))
            .filter(follow::Column::FollowedUserId.eq(followed_user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Follow::from))
    }

    async fn followers(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>> {
        let edges = FollowEntity::find()
            .filter(follow::Column::FollowedUserId.eq(user_id))
            .filter(follow::Column::FollowerUserId.ne(user_id))
            .order_by_asc(follow::Column::CreatedAt)
            .offset(page.offset())
            .limit(FOLLOW_PAGE_SIZE)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let ids = edges.iter().map(|e| e.follower_user_id).collect();
        self.users_in_order(ids).await
    }

    async fn followed(&self, user_id: Uuid, page: PageQuery) -> AppResult<Vec<User>> {
        let edges = FollowEntity::find()
            .filter(follow::Column::FollowerUserId.eq(user_id))
            .filter(follow::Column::FollowedUserId.ne(user_id))
            .order_by_asc(follow::Column::CreatedAt)
            .offset(page.offset())
            .limit(FOLLOW_PAGE_SIZE)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let ids = edges.iter().map(|e| e.followed_user_id).collect();
        self.users_in_order(ids).await
    }

    async fn delete_pair(&self, follower_user_id: Uuid, followed_user_id: Uuid) -> AppResult<()> {
        FollowEntity::delete_many()
            .filter(follow::Column::FollowerUserId.eq(follower_user_id))
            .filter(follow::Column::FollowedUserId.eq(followed_user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}

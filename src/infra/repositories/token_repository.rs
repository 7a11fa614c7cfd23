//! Access token repository.
//!
//! Issued tokens are persisted so they can be revoked; a bearer token is
//! accepted only while its row is still present.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[cfg(feature = "test-utils")]
use mockall::automock;

use super::entities::access_token::{self, ActiveModel, Entity as TokenEntity};
use crate::errors::{AppError, AppResult};

/// Access token persistence operations
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a freshly issued token for a user
    async fn insert(&self, user_id: Uuid, token: &str) -> AppResult<()>;

    /// True while the token has not been revoked
    async fn exists(&self, token: &str) -> AppResult<bool>;

    /// Revoke every token issued to a user
    async fn delete_for_user(&self, user_id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`TokenRepository`]
pub struct TokenStore {
    db: DatabaseConnection,
}

impl TokenStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepository for TokenStore {
    async fn insert(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token: Set(token.to_string()),
            created_at: Set(Utc::now()),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(())
    }

    async fn exists(&self, token: &str) -> AppResult<bool> {
        let result = TokenEntity::find()
            .filter(access_token::Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn delete_for_user(&self, user_id: Uuid) -> AppResult<()> {
        TokenEntity::delete_many()
            .filter(access_token::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}

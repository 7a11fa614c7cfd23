//! Follow database entity for SeaORM.
//!
//! A row is a directed edge; (follower_user_id, followed_user_id) carries a
//! unique composite index so the database rejects duplicate edges even when
//! two identical requests race past the service-level existence check.

use sea_orm::entity::prelude::*;

use crate::domain::Follow;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub follower_user_id: Uuid,
    pub followed_user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowerUserId",
        to = "super::user::Column::Id"
    )]
    FollowerUser,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowedUserId",
        to = "super::user::Column::Id"
    )]
    FollowedUser,
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Follow {
    fn from(model: Model) -> Self {
        Follow {
            id: model.id,
            follower_user_id: model.follower_user_id,
            followed_user_id: model.followed_user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

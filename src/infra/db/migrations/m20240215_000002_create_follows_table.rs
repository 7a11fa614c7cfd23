//! Migration: Create the follows table.
//!
//! The unique composite index on (follower_user_id, followed_user_id)
//! guarantees at most one edge per ordered pair, including under
//! concurrent identical requests. Foreign keys cascade so deleting a
//! user removes every edge touching it.

use sea_orm_migration::prelude::*;

use super::m20240215_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Follows::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Follows::FollowerUserId).uuid().not_null())
                    .col(ColumnDef::new(Follows::FollowedUserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Follows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Follows::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_follower_user_id")
                            .from(Follows::Table, Follows::FollowerUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_followed_user_id")
                            .from(Follows::Table, Follows::FollowedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_follows_pair_unique")
                    .table(Follows::Table)
                    .col(Follows::FollowerUserId)
                    .col(Follows::FollowedUserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_follows_pair_unique")
                    .table(Follows::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Follows::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Follows {
    Table,
    Id,
    FollowerUserId,
    FollowedUserId,
    CreatedAt,
    UpdatedAt,
}

//! Follow graph handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::{FOLLOWER_REMOVED, FOLLOW_CREATED, FOLLOW_STOPPED};
use crate::types::{ApiResponse, Created, PageQuery};

/// Follow creation payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StoreFollowRequest {
    /// Id of the user to follow
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub user_id: Uuid,
}

/// Follow a user
#[utoipa::path(
    post,
    path = "/follow",
    tag = "Follows",
    security(("bearer_auth" = [])),
    request_body = StoreFollowRequest,
    responses(
        (status = 201, description = "Follow created", body = String),
        (status = 403, description = "Already following this user"),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn store(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<StoreFollowRequest>,
) -> AppResult<Created<&'static str>> {
    state
        .follow_service
        .create_follow(payload.user_id, user.id)
        .await?;

    Ok(Created(FOLLOW_CREATED))
}

/// List the accounts following a user
#[utoipa::path(
    get,
    path = "/user/{id}/followers",
    tag = "Follows",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("page" = Option<u64>, Query, description = "Page number (30 per page)")
    ),
    responses(
        (status = 200, description = "Follower accounts", body = [UserResponse]),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn followers(
    Path(id): Path<Uuid>,
    Query(page): Query<PageQuery>,
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.follow_service.get_followers(id, page).await?;

    Ok(Json(ApiResponse::new(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// List the accounts a user follows
#[utoipa::path(
    get,
    path = "/user/{id}/followed",
    tag = "Follows",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("page" = Option<u64>, Query, description = "Page number (30 per page)")
    ),
    responses(
        (status = 200, description = "Followed accounts", body = [UserResponse]),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn followed(
    Path(id): Path<Uuid>,
    Query(page): Query<PageQuery>,
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.follow_service.get_followed(id, page).await?;

    Ok(Json(ApiResponse::new(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// Remove one of the authenticated user's followers
#[utoipa::path(
    delete,
    path = "/follower/{id}/remove",
    tag = "Follows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Follower user id")),
    responses(
        (status = 200, description = "Follower removed", body = String),
        (status = 400, description = "That user doesn't follow you"),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn remove_follower(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    state.follow_service.remove_follower(id, user.id).await?;

    Ok(Json(ApiResponse::new(FOLLOWER_REMOVED)))
}

/// Stop following a user
#[utoipa::path(
    delete,
    path = "/followed/{id}/remove",
    tag = "Follows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Followed user id")),
    responses(
        (status = 200, description = "No longer following", body = String),
        (status = 400, description = "You don't follow that user"),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn stop_following(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    state.follow_service.stop_following(id, user.id).await?;

    Ok(Json(ApiResponse::new(FOLLOW_STOPPED)))
}

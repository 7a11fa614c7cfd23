//! User account handlers.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{NewUser, UserChanges, UserResponse};
use crate::errors::AppResult;
use crate::services::USER_DELETED;
use crate::types::{ApiResponse, Created};

/// User registration payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StoreUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Unique handle
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "johndoe")]
    pub username: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Profile description
    #[schema(example = "Rustacean")]
    pub description: Option<String>,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User update payload; omitted fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New handle
    #[schema(example = "janedoe")]
    pub username: Option<String>,
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// New profile description
    pub description: Option<String>,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = StoreUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn store(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StoreUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(NewUser {
            name: payload.name,
            username: payload.username,
            email: payload.email,
            description: payload.description,
            password: payload.password,
        })
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn show(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(ApiResponse::new(UserResponse::from(user))))
}

/// Update a user; only the owner may do this
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn update(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let updated = state
        .user_service
        .update_user(
            id,
            UserChanges {
                name: payload.name,
                username: payload.username,
                email: payload.email,
                description: payload.description,
            },
            user.id,
        )
        .await?;

    Ok(Json(ApiResponse::new(UserResponse::from(updated))))
}

/// Delete a user; only the owner may do this
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "User doesn't exist"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn destroy(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    state.user_service.delete_user(id, user.id).await?;

    Ok(Json(ApiResponse::new(USER_DELETED)))
}

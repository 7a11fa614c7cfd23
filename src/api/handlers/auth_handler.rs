//! Authentication handlers.

use axum::{extract::State, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::LOGGED_OUT;
use crate::types::{ApiResponse, Created};

/// Token request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Generate a bearer token from credentials
#[utoipa::path(
    post,
    path = "/token",
    tag = "Authentication",
    request_body = TokenRequest,
    responses(
        (status = 201, description = "Token generated", body = String),
        (status = 404, description = "No account with that email"),
        (status = 422, description = "Invalid password"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TokenRequest>,
) -> AppResult<Created<String>> {
    let token = state
        .auth_service
        .generate_token(payload.email, payload.password)
        .await?;

    Ok(Created(token))
}

/// Revoke every token of the authenticated user
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tokens revoked", body = String),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    state.auth_service.logout(user.id).await?;

    Ok(Json(ApiResponse::new(LOGGED_OUT)))
}

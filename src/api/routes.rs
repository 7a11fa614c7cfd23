//! Application route configuration.

use axum::{
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_handler, follow_handler, user_handler};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Protected handlers authenticate through the `CurrentUser` extractor,
/// so public and protected methods can share a path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication
        .route("/token", post(auth_handler::generate_token))
        .route("/logout", post(auth_handler::logout))
        // Users
        .route("/user", post(user_handler::store))
        .route(
            "/user/:id",
            get(user_handler::show)
                .put(user_handler::update)
                .delete(user_handler::destroy),
        )
        // Follow graph
        .route("/follow", post(follow_handler::store))
        .route("/user/:id/followers", get(follow_handler::followers))
        .route("/user/:id/followed", get(follow_handler::followed))
        .route(
            "/follower/:id/remove",
            delete(follow_handler::remove_follower),
        )
        .route(
            "/followed/:id/remove",
            delete(follow_handler::stop_following),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the socialnet API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness endpoint
async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

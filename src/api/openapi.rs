//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, follow_handler, user_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the socialnet API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "socialnet API",
        version = "0.1.0",
        description = "Social networking API: user accounts, token authentication, and a follow graph",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::generate_token,
        auth_handler::logout,
        // User endpoints
        user_handler::store,
        user_handler::show,
        user_handler::update,
        user_handler::destroy,
        // Follow endpoints
        follow_handler::store,
        follow_handler::followers,
        follow_handler::followed,
        follow_handler::remove_follower,
        follow_handler::stop_following,
    ),
    components(
        schemas(
            UserResponse,
            auth_handler::TokenRequest,
            user_handler::StoreUserRequest,
            user_handler::UpdateUserRequest,
            follow_handler::StoreFollowRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token generation and logout"),
        (name = "Users", description = "User account operations"),
        (name = "Follows", description = "Follow graph operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Bearer token obtained from POST /token"))
                        .build(),
                ),
            );
        }
    }
}

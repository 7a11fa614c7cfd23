//! HTTP layer integration tests.
//!
//! Routes are exercised through `tower::ServiceExt::oneshot` against the
//! real router with stubbed services, so extractors, status codes, and
//! the response envelope are all covered.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use socialnet::api::create_router;
use socialnet::domain::{NewUser, User, UserChanges};
use socialnet::errors::{AppError, AppResult};
use socialnet::services::{AuthService, Claims, FollowService, UserService};
use socialnet::types::PageQuery;
use socialnet::AppState;

const VALID_TOKEN: &str = "valid-test-token";

fn acting_user_id() -> Uuid {
    Uuid::from_u128(0x11111111_2222_3333_4444_555555555555)
}

fn test_user(id: Uuid) -> User {
    User {
        id,
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        description: None,
        password_hash: "hashed".to_string(),
        email_verified_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

struct StubAuthService;

#[async_trait]
impl AuthService for StubAuthService {
    async fn generate_token(&self, _email: String, password: String) -> AppResult<String> {
        if password == "CorrectHorse1!" {
            Ok("issued-token".to_string())
        } else {
            Err(AppError::unprocessable("Invalid password."))
        }
    }

    async fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == VALID_TOKEN {
            let now = Utc::now().timestamp();
            Ok(Claims {
                sub: acting_user_id(),
                email: "test@example.com".to_string(),
                exp: now + 3600,
                iat: now,
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }

    async fn logout(&self, _acting_user_id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

struct StubUserService;

#[async_trait]
impl UserService for StubUserService {
    async fn create_user(&self, details: NewUser) -> AppResult<User> {
        let mut user = test_user(Uuid::new_v4());
        user.name = details.name;
        user.username = details.username;
        user.email = details.email;
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        if id == acting_user_id() {
            Ok(test_user(id))
        } else {
            Err(AppError::not_found("User doesn't exists."))
        }
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
        acting_user_id: Uuid,
    ) -> AppResult<User> {
        if id != acting_user_id {
            return Err(AppError::forbidden(
                "You don't have permission to update or delete this user.",
            ));
        }
        let mut user = test_user(id);
        if let Some(name) = changes.name {
            user.name = name;
        }
        Ok(user)
    }

    async fn delete_user(&self, _id: Uuid, _acting_user_id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

struct StubFollowService;

#[async_trait]
impl FollowService for StubFollowService {
    async fn create_follow(&self, _target_user_id: Uuid, _acting_user_id: Uuid) -> AppResult<()> {
        Ok(())
    }

    async fn get_followers(&self, _user_id: Uuid, _page: PageQuery) -> AppResult<Vec<User>> {
        Ok(vec![test_user(Uuid::new_v4()), test_user(Uuid::new_v4())])
    }

    async fn get_followed(&self, _user_id: Uuid, _page: PageQuery) -> AppResult<Vec<User>> {
        Ok(vec![test_user(Uuid::new_v4())])
    }

    async fn remove_follower(
        &self,
        _follower_user_id: Uuid,
        _acting_user_id: Uuid,
    ) -> AppResult<()> {
        Err(AppError::bad_request("This user doesn't follow you."))
    }

    async fn stop_following(&self, _target_user_id: Uuid, _acting_user_id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

fn test_app() -> Router {
    create_router(AppState::new(
        Arc::new(StubAuthService),
        Arc::new(StubUserService),
        Arc::new(StubFollowService),
    ))
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generate_token_created() {
    let request = json_request(
        "POST",
        "/token",
        json!({"email": "test@example.com", "password": "CorrectHorse1!"}),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "issued-token");
}

#[tokio::test]
async fn test_generate_token_wrong_password() {
    let request = json_request(
        "POST",
        "/token",
        json!({"email": "test@example.com", "password": "WrongHorse1!"}),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "Invalid password.");
}

#[tokio::test]
async fn test_create_user_created() {
    let request = json_request(
        "POST",
        "/user",
        json!({
            "name": "Test User",
            "username": "testuser",
            "email": "test@example.com",
            "password": "SecurePass123!"
        }),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"]["username"], "testuser");
    // The password hash never leaves the server
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let request = json_request(
        "POST",
        "/user",
        json!({
            "name": "Test User",
            "username": "testuser",
            "email": "not-an-email",
            "password": "SecurePass123!"
        }),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_show_user_public() {
    // No Authorization header needed to read a profile
    let uri = format!("/user/{}", acting_user_id());
    let response = test_app()
        .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"]["email"], "test@example.com");
}

#[tokio::test]
async fn test_show_user_not_found_envelope() {
    let uri = format!("/user/{}", Uuid::new_v4());
    let response = test_app()
        .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // Errors share the `{"data": ...}` envelope
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "User doesn't exists.");
}

#[tokio::test]
async fn test_update_user_requires_token() {
    let request = json_request(
        "PUT",
        &format!("/user/{}", acting_user_id()),
        json!({"name": "New Name"}),
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_user_with_token() {
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/user/{}", acting_user_id()))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .body(Body::from(json!({"name": "New Name"}).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"]["name"], "New Name");
}

#[tokio::test]
async fn test_update_other_user_forbidden() {
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/user/{}", Uuid::new_v4()))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .body(Body::from(json!({"name": "Hijacked"}).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_user_with_token() {
    let response = test_app()
        .oneshot(authed_request(
            "DELETE",
            &format!("/user/{}", acting_user_id()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "User successfully deleted!");
}

#[tokio::test]
async fn test_follow_requires_token() {
    let request = json_request("POST", "/follow", json!({"user_id": Uuid::new_v4()}));

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_follow_rejects_bad_token() {
    let request = Request::builder()
        .method("POST")
        .uri("/follow")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer forged-token")
        .body(Body::from(json!({"user_id": Uuid::new_v4()}).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_follow_with_token() {
    let request = Request::builder()
        .method("POST")
        .uri("/follow")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .body(Body::from(json!({"user_id": Uuid::new_v4()}).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "User successfully followed.");
}

#[tokio::test]
async fn test_followers_listing() {
    let response = test_app()
        .oneshot(authed_request(
            "GET",
            &format!("/user/{}/followers?page=1", acting_user_id()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_followed_listing_defaults_page() {
    let response = test_app()
        .oneshot(authed_request(
            "GET",
            &format!("/user/{}/followed", acting_user_id()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_follower_bad_request() {
    let response = test_app()
        .oneshot(authed_request(
            "DELETE",
            &format!("/follower/{}/remove", Uuid::new_v4()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "This user doesn't follow you.");
}

#[tokio::test]
async fn test_stop_following_with_token() {
    let response = test_app()
        .oneshot(authed_request(
            "DELETE",
            &format!("/followed/{}/remove", Uuid::new_v4()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "The informed user is not followed by you anymore.");
}

#[tokio::test]
async fn test_logout_with_token() {
    let response = test_app()
        .oneshot(authed_request("POST", "/logout"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"], "Successfully disconnected.");
}

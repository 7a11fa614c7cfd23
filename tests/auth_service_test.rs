//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::Sequence;
use uuid::Uuid;

use socialnet::config::Config;
use socialnet::domain::{Password, User};
use socialnet::errors::AppError;
use socialnet::infra::{
    FollowRepository, MockFollowRepository, MockTokenRepository, MockUserRepository,
    TokenRepository, UnitOfWork, UserRepository,
};
use socialnet::services::{AuthService, Authenticator};

const TEST_SECRET: &str = "test-secret-key-minimum-32-chars!!";

fn test_user_with_password(id: Uuid, password: &str) -> User {
    User {
        id,
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        description: None,
        password_hash: Password::new(password).unwrap().into_string(),
        email_verified_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Test mock for UnitOfWork that wraps mock repositories
struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    follows: Arc<MockFollowRepository>,
    tokens: Arc<MockTokenRepository>,
}

impl TestUnitOfWork {
    fn new(users: MockUserRepository, tokens: MockTokenRepository) -> Self {
        Self {
            users: Arc::new(users),
            follows: Arc::new(MockFollowRepository::new()),
            tokens: Arc::new(tokens),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn follows(&self) -> Arc<dyn FollowRepository> {
        self.follows.clone()
    }

    fn tokens(&self) -> Arc<dyn TokenRepository> {
        self.tokens.clone()
    }
}

fn service(
    users: MockUserRepository,
    tokens: MockTokenRepository,
) -> Authenticator<TestUnitOfWork> {
    Authenticator::new(
        Arc::new(TestUnitOfWork::new(users, tokens)),
        Config::for_tests(TEST_SECRET),
    )
}

#[tokio::test]
async fn test_generate_token_success() {
    let user = test_user_with_password(Uuid::new_v4(), "CorrectHorse1!");
    let user_id = user.id;

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    // Previous tokens are revoked before the new one is stored
    let mut seq = Sequence::new();
    let mut tokens = MockTokenRepository::new();
    tokens
        .expect_delete_for_user()
        .times(1)
        .withf(move |id| *id == user_id)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    tokens
        .expect_insert()
        .times(1)
        .withf(move |id, token| *id == user_id && !token.is_empty())
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let token = service(users, tokens)
        .generate_token("test@example.com".to_string(), "CorrectHorse1!".to_string())
        .await
        .unwrap();

    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_generate_token_unknown_email() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));

    let mut tokens = MockTokenRepository::new();
    tokens.expect_insert().times(0);

    let result = service(users, tokens)
        .generate_token("ghost@example.com".to_string(), "whatever1!".to_string())
        .await;

    match result.unwrap_err() {
        AppError::NotFound(msg) => assert_eq!(msg, "User doesn't exists."),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_token_wrong_password() {
    let user = test_user_with_password(Uuid::new_v4(), "CorrectHorse1!");

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let mut tokens = MockTokenRepository::new();
    tokens.expect_delete_for_user().times(0);
    tokens.expect_insert().times(0);

    let result = service(users, tokens)
        .generate_token("test@example.com".to_string(), "WrongHorse1!".to_string())
        .await;

    match result.unwrap_err() {
        AppError::UnprocessableEntity(msg) => assert_eq!(msg, "Invalid password."),
        other => panic!("expected UnprocessableEntity, got {:?}", other),
    }
}

#[tokio::test]
async fn test_verify_token_round_trip() {
    let user = test_user_with_password(Uuid::new_v4(), "CorrectHorse1!");
    let user_id = user.id;

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let mut tokens = MockTokenRepository::new();
    tokens.expect_delete_for_user().returning(|_| Ok(()));
    tokens.expect_insert().returning(|_, _| Ok(()));
    tokens.expect_exists().returning(|_| Ok(true));

    let auth = service(users, tokens);
    let token = auth
        .generate_token("test@example.com".to_string(), "CorrectHorse1!".to_string())
        .await
        .unwrap();

    let claims = auth.verify_token(&token).await.unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "test@example.com");
}

#[tokio::test]
async fn test_verify_token_rejects_revoked() {
    let user = test_user_with_password(Uuid::new_v4(), "CorrectHorse1!");

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let mut tokens = MockTokenRepository::new();
    tokens.expect_delete_for_user().returning(|_| Ok(()));
    tokens.expect_insert().returning(|_, _| Ok(()));
    // Signature is valid but the row is gone
    tokens.expect_exists().returning(|_| Ok(false));

    let auth = service(users, tokens);
    let token = auth
        .generate_token("test@example.com".to_string(), "CorrectHorse1!".to_string())
        .await
        .unwrap();

    let result = auth.verify_token(&token).await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_verify_token_rejects_garbage() {
    let tokens = MockTokenRepository::new();

    let result = service(MockUserRepository::new(), tokens)
        .verify_token("not-a-jwt")
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Jwt(_)));
}

#[tokio::test]
async fn test_logout_revokes_all_tokens() {
    let user_id = Uuid::new_v4();

    let mut tokens = MockTokenRepository::new();
    tokens
        .expect_delete_for_user()
        .times(1)
        .withf(move |id| *id == user_id)
        .returning(|_| Ok(()));

    let result = service(MockUserRepository::new(), tokens)
        .logout(user_id)
        .await;

    assert!(result.is_ok());
}

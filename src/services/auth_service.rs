//! Authentication service - token issue, verification, and revocation.
//!
//! Tokens are signed JWTs, but every issued token is also persisted; a
//! token is accepted only while its row exists. Issuing a token revokes
//! all of the user's previous tokens, and logout revokes everything.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

use super::user_service::USER_NOT_FOUND;

pub(crate) const INVALID_PASSWORD: &str = "Invalid password.";

/// Message confirming a logout
pub const LOGGED_OUT: &str = "Successfully disconnected.";

/// Token claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a fresh bearer token, revoking all tokens
    /// previously issued to the user.
    async fn generate_token(&self, email: String, password: String) -> AppResult<String>;

    /// Validate a bearer token (signature, expiry, and revocation state)
    /// and return its claims.
    async fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Revoke every token issued to the acting user.
    async fn logout(&self, acting_user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`AuthService`] using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn mint_token(&self, user_id: Uuid, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(token)
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn generate_token(&self, email: String, password: String) -> AppResult<String> {
        // Unknown email and bad password intentionally answer with distinct
        // statuses (404 vs 422); existing clients rely on the difference.
        let user = self
            .uow
            .users()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::unprocessable(INVALID_PASSWORD));
        }

        // One live session per user: drop everything issued before.
        self.uow.tokens().delete_for_user(user.id).await?;

        let token = self.mint_token(user.id, &user.email)?;
        self.uow.tokens().insert(user.id, &token).await?;

        Ok(token)
    }

    async fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        // Signature alone is not enough; a revoked token has no row.
        if !self.uow.tokens().exists(token).await? {
            return Err(AppError::Unauthorized);
        }

        Ok(token_data.claims)
    }

    async fn logout(&self, acting_user_id: Uuid) -> AppResult<()> {
        self.uow.tokens().delete_for_user(acting_user_id).await
    }
}

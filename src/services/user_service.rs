//! User service - account CRUD with existence and ownership rules.
//!
//! Every mutation is preceded by an existence check, and update/delete are
//! restricted to the owning user: the acting user's id arrives as an
//! explicit parameter from the HTTP layer, never from ambient state.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, Password, User, UserChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::{NewUserRecord, UnitOfWork};

pub(crate) const USER_NOT_FOUND: &str = "User doesn't exists.";
pub(crate) const NOT_OWNER: &str = "You don't have permission to update or delete this user.";

/// Message confirming a user deletion
pub const USER_DELETED: &str = "User successfully deleted!";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user. The plaintext password is hashed before the
    /// record is handed to the store.
    async fn create_user(&self, details: NewUser) -> AppResult<User>;

    /// Get user by id
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Partially update a user; only the owner may do this
    async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
        acting_user_id: Uuid,
    ) -> AppResult<User>;

    /// Delete a user; only the owner may do this
    async fn delete_user(&self, id: Uuid, acting_user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`UserService`] using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Shared precondition for mutations: the target must exist, and when
    /// ownership is checked, the actor must be the target.
    async fn guard(&self, id: Uuid, acting_user_id: Option<Uuid>) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        if let Some(actor) = acting_user_id {
            if actor != id {
                return Err(AppError::forbidden(NOT_OWNER));
            }
        }

        Ok(user)
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create_user(&self, details: NewUser) -> AppResult<User> {
        let password_hash = Password::new(&details.password)?.into_string();

        self.uow
            .users()
            .create(NewUserRecord {
                name: details.name,
                username: details.username,
                email: details.email,
                description: details.description,
                password_hash,
            })
            .await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.guard(id, None).await
    }

    async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
        acting_user_id: Uuid,
    ) -> AppResult<User> {
        self.guard(id, Some(acting_user_id)).await?;

        self.uow.users().update(id, changes).await
    }

    async fn delete_user(&self, id: Uuid, acting_user_id: Uuid) -> AppResult<()> {
        self.guard(id, Some(acting_user_id)).await?;

        self.uow.users().delete(id).await
    }
}

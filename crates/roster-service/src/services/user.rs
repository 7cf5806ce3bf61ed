//! User service
//!
//! Orchestrates the user record operations: creation with the uniqueness
//! workflow, pagination, lookups, and deletion.

use roster_core::entities::NewUser;
use roster_core::value_objects::{UserId, Username};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, MessageResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new user record.
    ///
    /// The username is validated and lowercased before any lookup runs; the
    /// repository then performs both duplicate checks and the insert in one
    /// transactional session.
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let username = Username::parse(&request.username)?;
        let new_user = NewUser::new(request.email, username);

        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = %user.id, username = %user.username, "User created");

        Ok(UserResponse::from(&user))
    }

    /// List users in insertion order with offset pagination.
    ///
    /// An empty page is a valid result, not an error.
    #[instrument(skip(self))]
    pub async fn list_users(&self, skip: i64, limit: i64) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list(skip, limit).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Get the first user with a matching email address.
    ///
    /// The email is used verbatim; no format pre-validation is applied.
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        Ok(UserResponse::from(&user))
    }

    /// Permanently delete a user by ID
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<MessageResponse> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted");

        Ok(MessageResponse::new("User deleted successfully"))
    }
}

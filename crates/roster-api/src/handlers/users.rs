//! User handlers
//!
//! Endpoints for creating, listing, fetching, and deleting user records.

use axum::{
    extract::{Path, State},
    Json,
};
use roster_core::UserId;
use roster_service::{CreateUserRequest, MessageResponse, UserResponse, UserService};

use crate::extractors::{Page, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new user
///
/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// List users with offset pagination
///
/// GET /users/?skip&limit
pub async fn list_users(
    State(state): State<AppState>,
    page: Page,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users(page.skip, page.limit).await?;
    Ok(Json(users))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id: UserId = user_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid user id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Get user by email address
///
/// GET /users/email/{email}
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user_by_email(&email).await?;
    Ok(Json(response))
}

/// Delete user by ID
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id: UserId = user_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid user id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.delete_user(user_id).await?;
    Ok(Json(response))
}

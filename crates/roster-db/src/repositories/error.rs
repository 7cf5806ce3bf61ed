//! Error handling utilities for repositories

use roster_core::error::DomainError;
use roster_core::value_objects::UserId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map unique-constraint violations on the users table to their conflict
/// errors, dispatching on the violated constraint's name.
pub fn map_users_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_email_key") => return DomainError::EmailAlreadyRegistered,
                Some("users_username_key") => return DomainError::UsernameTaken,
                _ => {}
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

//! User entity - a stored directory record

use chrono::{DateTime, Utc};

use crate::value_objects::{UserId, Username};

/// A persisted user record.
///
/// Constructed only from storage; the id and both timestamps are assigned
/// by the database at insert time. `username` is always in canonical
/// (lowercased) form. `updated_at` equals `created_at` until a mutation
/// refreshes it; no such mutation exists today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a user.
///
/// Holding a [`Username`] (not a raw string) means a `NewUser` cannot be
/// built from an unvalidated candidate name.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: Username,
}

impl NewUser {
    pub fn new(email: impl Into<String>, username: Username) -> Self {
        Self {
            email: email.into(),
            username,
        }
    }
}

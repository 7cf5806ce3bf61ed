//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! User row <-> entity mapper

use roster_core::entities::User;
use roster_core::value_objects::UserId;

use crate::models::UserRow;

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            email: row.email,
            username: row.username,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{NewUser, User};
use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, UserRepository};
use roster_core::value_objects::UserId;

use crate::models::UserRow;

use super::error::{map_db_error, map_users_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        // The whole uniqueness workflow runs in one transactional session.
        // Every early return drops the transaction, which rolls it back.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let email_taken = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(&new_user.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if email_taken {
            return Err(DomainError::EmailAlreadyRegistered);
        }

        let username_taken = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(new_user.username.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if username_taken {
            return Err(DomainError::UsernameTaken);
        }

        // The unique constraints remain the backstop for a concurrent
        // insert landing between the checks above and this statement.
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (email, username, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, email, username, created_at, updated_at
            ",
        )
        .bind(&new_user.email)
        .bind(new_user.username.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_users_unique_violation)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(User::from(row))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, username, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, username, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: i64, limit: i64) -> RepoResult<Vec<User>> {
        // Serial primary key order is insertion order.
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, username, created_at, updated_at
            FROM users
            ORDER BY id
            OFFSET $1
            LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

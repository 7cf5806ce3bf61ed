//! Startup bootstrap - database and schema creation
//!
//! Both steps run before the server accepts traffic; a failure here is
//! fatal to startup.

use sqlx::postgres::PgConnection;
use sqlx::{Connection, PgPool};
use tracing::info;

/// Schema for the users table.
///
/// The unique constraints on `email` and `username` are the authoritative
/// backstop for the duplicate pre-checks in the repository; their default
/// Postgres names (`users_email_key`, `users_username_key`) are what the
/// repository matches when mapping violations.
const CREATE_USERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Create the target database if it does not exist yet.
///
/// Connects with administrative credentials to the server's maintenance
/// database, checks the catalog, and issues `CREATE DATABASE` when absent.
pub async fn ensure_database_exists(admin_url: &str, database: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(admin_url).await?;

    let exists: Option<i32> =
        sqlx::query_scalar(r"SELECT 1 FROM pg_catalog.pg_database WHERE datname = $1")
            .bind(database)
            .fetch_optional(&mut conn)
            .await?;

    if exists.is_none() {
        // Identifiers cannot be bound as parameters; quote by doubling.
        let statement = format!(r#"CREATE DATABASE "{}""#, database.replace('"', "\"\""));
        sqlx::query(&statement).execute(&mut conn).await?;
        info!(database, "Database created");
    } else {
        info!(database, "Database already exists");
    }

    conn.close().await?;
    Ok(())
}

/// Create the users table if it is not already present. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    info!("Schema ready");
    Ok(())
}

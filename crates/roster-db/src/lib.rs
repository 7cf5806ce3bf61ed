//! # roster-db
//!
//! Persistence gateway implementing the repository trait with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate owns database connectivity:
//!
//! - Bounded connection pool management
//! - Startup bootstrap (database and schema creation)
//! - Row models with SQLx `FromRow` derives
//! - Entity mappers and the repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{create_pool, PgUserRepository, PoolConfig};
//! use roster_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::default();
//!     let pool = create_pool(&config).await?;
//!     roster_db::bootstrap::ensure_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use bootstrap::{ensure_database_exists, ensure_schema};
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::PgUserRepository;

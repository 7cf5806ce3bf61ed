//! Service context - dependency container for services
//!
//! Constructed once at startup and handed by reference into every service;
//! nothing in the process reaches for global connection state.

use std::sync::Arc;

use roster_core::traits::UserRepository;
use roster_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(pool: PgPool, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { pool, user_repo }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"UserRepository")
            .finish()
    }
}

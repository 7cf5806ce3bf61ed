//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data.
///
/// Seeded with the pid so concurrent test binaries against a shared
/// database don't collide.
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst) + u64::from(std::process::id()) * 1_000_000
}

/// User creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub username: String,
}

impl CreateUserPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            username: format!("testuser{suffix}"),
        }
    }
}

/// User record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Confirmation message body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps serialize as ISO-8601 (RFC 3339) strings.

use chrono::{DateTime, Utc};
use roster_core::UserId;
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// The response view of a stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Plain confirmation message (e.g. after a delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Service Metadata
// ============================================================================

/// Root endpoint metadata
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: ServiceEndpoints,
}

/// Index of the available user operations
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEndpoints {
    pub create_user: &'static str,
    pub list_users: &'static str,
    pub get_user: &'static str,
    pub get_user_by_email: &'static str,
    pub delete_user: &'static str,
}

impl ServiceInfoResponse {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            message: format!("Welcome to {name}"),
            version: version.to_string(),
            endpoints: ServiceEndpoints {
                create_user: "POST /users/",
                list_users: "GET /users/",
                get_user: "GET /users/{id}",
                get_user_by_email: "GET /users/email/{email}",
                delete_user: "DELETE /users/{id}",
            },
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        let check = |healthy: bool| if healthy { "healthy" } else { "unhealthy" };
        Self {
            status: check(database_healthy).to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: check(database_healthy).to_string(),
            },
        }
    }
}

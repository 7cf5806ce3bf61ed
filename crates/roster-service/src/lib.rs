//! # roster-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateUserRequest, HealthChecks, HealthResponse, MessageResponse, ReadinessResponse,
    ServiceEndpoints, ServiceInfoResponse, UserResponse,
};
pub use services::{ServiceContext, ServiceError, ServiceResult, UserService};

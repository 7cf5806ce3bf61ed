//! Service metadata handler

use axum::{extract::State, Json};
use roster_service::ServiceInfoResponse;

use crate::state::AppState;

/// Root endpoint with service information
///
/// GET /
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::new(
        &state.config().app.name,
        env!("CARGO_PKG_VERSION"),
    ))
}

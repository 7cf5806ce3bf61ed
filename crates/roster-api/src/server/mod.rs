//! Server setup and initialization
//!
//! Provides the main application builder and server runner. Startup order
//! matters: the database and schema must exist before the first request is
//! accepted, and any bootstrap failure aborts before the listener binds.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use roster_common::{AppConfig, AppError};
use roster_db::{create_pool, ensure_database_exists, ensure_schema, PgUserRepository, PoolConfig};
use roster_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create the target database before any pool connects to it
    info!(database = %config.database.database, "Ensuring database exists...");
    ensure_database_exists(&config.database.admin_url(), &config.database.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool_config = PoolConfig::from(&config.database);
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create tables
    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create repositories and build the service context
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let service_context = ServiceContext::new(pool, user_repo);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

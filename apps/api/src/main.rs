//! bizreviews API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use bizreviews_application::ResourceRepository;
use bizreviews_core::AppError;
use bizreviews_infrastructure::{InMemoryResourceRepository, PostgresResourceRepository};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::api_config::{ApiConfig, StoreBackendConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let repository: Arc<dyn ResourceRepository> = match &config.store_backend {
        StoreBackendConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to connect to database: {error}"))
                })?;

            sqlx::migrate!("../../crates/infrastructure/migrations")
                .run(&pool)
                .await
                .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            Arc::new(PostgresResourceRepository::new(pool))
        }
        StoreBackendConfig::Memory => {
            if config.migrate_only {
                return Err(AppError::Validation(
                    "migrate requires STORE_BACKEND=postgres".to_owned(),
                ));
            }

            warn!("using in-memory store; data is lost on restart");
            Arc::new(InMemoryResourceRepository::new())
        }
    };

    let app = api_router::build_router(AppState::new(repository));

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "bizreviews-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

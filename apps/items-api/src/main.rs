//! Items API
//!
//! CRUD service for items over HTTP, backed by an in-memory map or
//! PostgreSQL (`ITEMS_BACKEND=memory|postgres`).

use axum_helpers::server::{close_postgres, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::InMemoryItemRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StorageBackend};
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({} backend)",
        config.app.name, config.app.version, config.backend
    );

    let storage = match config.backend {
        StorageBackend::Memory => Storage::Memory(InMemoryItemRepository::new()),
        StorageBackend::Postgres => {
            let db =
                database::postgres::connect_from_config_with_retry(config.database.clone(), None)
                    .await?;
            database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;
            Storage::Postgres(db)
        }
    };

    let state = AppState { config, storage };
    let router = api::app(&state);

    let db = state.database().cloned();
    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = db {
                close_postgres(db, "PostgreSQL").await;
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}

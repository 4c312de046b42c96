use tracing::{error, info};

/// Close a SeaORM pool during shutdown, logging the outcome.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!(pool = name, "PostgreSQL pool closed"),
        Err(e) => error!(pool = name, "Error closing PostgreSQL pool: {}", e),
    }
}

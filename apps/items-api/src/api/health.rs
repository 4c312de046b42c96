//! Readiness check for the active storage backend.

use crate::state::{AppState, Storage};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// `/ready`: pings PostgreSQL when it is the backend; in-memory storage is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let check: HealthCheckFuture<'_> = match &state.storage {
        Storage::Memory(_) => Box::pin(async { Ok(()) }),
        Storage::Postgres(db) => Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| e.to_string())
        }),
    };

    match run_health_checks(vec![("storage", check)]).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}

use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

use crate::state::{AppState, Storage};

pub fn router(state: &AppState) -> Router {
    match &state.storage {
        Storage::Memory(repository) => handlers::router(ItemService::new(repository.clone())),
        Storage::Postgres(db) => handlers::router(ItemService::new(PgItemRepository::new(db.clone()))),
    }
}

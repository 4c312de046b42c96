//! Shared application state.

use database::postgres::DatabaseConnection;
use domain_items::InMemoryItemRepository;

/// Storage opened at startup for the configured backend
#[derive(Clone)]
pub enum Storage {
    /// Clones share the same map
    Memory(InMemoryItemRepository),
    Postgres(DatabaseConnection),
}

/// Cloned into every router that needs it (cheap Arc clones).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub storage: Storage,
}

impl AppState {
    pub fn database(&self) -> Option<&DatabaseConnection> {
        match &self.storage {
            Storage::Postgres(db) => Some(db),
            Storage::Memory(_) => None,
        }
    }
}

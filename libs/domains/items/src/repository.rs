use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{Item, ItemFields};

/// Storage backend for items.
///
/// Each backend returns its own record type; the service converts it into
/// [`Item`]. Absence is reported as `None`/`false`, never as an error.
#[cfg_attr(test, mockall::automock(type Record = Item;))]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    type Record: Into<Item> + Send + 'static;

    /// All items, ordered by id ascending
    async fn list(&self) -> ItemResult<Vec<Self::Record>>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Self::Record>>;

    /// Store a new item under a freshly assigned id
    async fn create(&self, fields: ItemFields) -> ItemResult<Self::Record>;

    /// Overwrite name and description; `None` if `id` does not exist
    async fn update(&self, id: i32, fields: ItemFields) -> ItemResult<Option<Self::Record>>;

    /// `true` if an item was removed
    async fn delete(&self, id: i32) -> ItemResult<bool>;
}

/// Record kept by [`InMemoryItemRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl StoredItem {
    fn new(id: i32, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }
}

impl From<StoredItem> for Item {
    fn from(stored: StoredItem) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            description: stored.description,
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    items: BTreeMap<i32, StoredItem>,
    /// Last id handed out; ids are never reused
    last_id: i32,
}

/// Process-local repository for development and tests.
///
/// Clones share the same state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    type Record = StoredItem;

    async fn list(&self) -> ItemResult<Vec<StoredItem>> {
        let state = self.state.read().await;
        Ok(state.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<StoredItem>> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn create(&self, fields: ItemFields) -> ItemResult<StoredItem> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let item = StoredItem::new(state.last_id, fields);
        state.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn update(&self, id: i32, fields: ItemFields) -> ItemResult<Option<StoredItem>> {
        let mut state = self.state.write().await;

        let Some(item) = state.items.get_mut(&id) else {
            return Ok(None);
        };
        item.name = fields.name;
        item.description = fields.description;

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let mut state = self.state.write().await;

        let removed = state.items.remove(&id).is_some();
        if removed {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }
}

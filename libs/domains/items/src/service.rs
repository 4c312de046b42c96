use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Backend-agnostic façade over an [`ItemRepository`].
///
/// Converts payloads into [`ItemFields`](crate::models::ItemFields) and backend
/// records into [`Item`]. Missing items stay `None`/`false`; deciding what that
/// means is left to the caller.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let records = self.repository.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Option<Item>> {
        Ok(self.repository.get_by_id(id).await?.map(Into::into))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let record = self.repository.create(input.into()).await?;
        Ok(record.into())
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        Ok(self
            .repository
            .update(id, input.into())
            .await?
            .map(Into::into))
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<bool> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;
    use crate::models::ItemFields;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn item(id: i32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_item_passes_fields_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .with(eq(ItemFields::new("Test", Some("X".to_string()))))
            .times(1)
            .returning(|fields| {
                Ok(Item {
                    id: 1,
                    name: fields.name,
                    description: fields.description,
                })
            });

        let service = ItemService::new(repo);
        let created = service
            .create_item(CreateItem {
                name: "Test".to_string(),
                description: Some("X".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.description.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_get_item_absent_stays_none() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = ItemService::new(repo);
        assert_eq!(service.get_item(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_item_absent_stays_none() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ItemService::new(repo);
        let result = service
            .update_item(
                3,
                UpdateItem {
                    name: "n".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_items_preserves_order() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![item(1, "a"), item(2, "b")]));

        let service = ItemService::new(repo);
        let names: Vec<String> = service
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_delete_item_reports_absence() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().with(eq(4)).returning(|_| Ok(false));

        let service = ItemService::new(repo);
        assert!(!service.delete_item(4).await.unwrap());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .returning(|| Err(ItemError::Database(sea_orm::DbErr::Custom("down".to_string()))));

        let service = ItemService::new(repo);
        assert!(matches!(
            service.list_items().await,
            Err(ItemError::Database(_))
        ));
    }
}

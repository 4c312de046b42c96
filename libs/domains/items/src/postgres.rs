use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};

use crate::{entity, error::ItemResult, models::ItemFields, repository::ItemRepository};

/// PostgreSQL-backed repository.
///
/// Every call runs in its own transaction. Mutations commit before returning;
/// paths that change nothing roll back. A transaction dropped mid-flight (error
/// or cancelled request) is rolled back by the driver.
#[derive(Debug, Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    type Record = entity::Model;

    async fn list(&self) -> ItemResult<Vec<entity::Model>> {
        let txn = self.db.begin().await?;
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&txn)
            .await?;
        txn.rollback().await?;

        Ok(models)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<entity::Model>> {
        let txn = self.db.begin().await?;
        let model = entity::Entity::find_by_id(id).one(&txn).await?;
        txn.rollback().await?;

        Ok(model)
    }

    async fn create(&self, fields: ItemFields) -> ItemResult<entity::Model> {
        let txn = self.db.begin().await?;
        let model = entity::ActiveModel {
            name: Set(fields.name),
            description: Set(fields.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model)
    }

    async fn update(&self, id: i32, fields: ItemFields) -> ItemResult<Option<entity::Model>> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active: entity::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.description = Set(fields.description);
        let model = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(model))
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        existing.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(true)
    }
}

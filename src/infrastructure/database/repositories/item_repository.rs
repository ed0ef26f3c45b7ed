//! SeaORM implementation of ItemRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::item::{Item, ItemRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::item;

pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: item::Model) -> Item {
    Item {
        id: m.id,
        owner_id: m.owner_id,
        name: m.name,
        description: m.description,
        available: m.available,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>> {
        let model = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Item>> {
        let models = item::Entity::find()
            .filter(item::Column::OwnerId.eq(owner_id))
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, i: Item) -> DomainResult<Item> {
        debug!("Saving item: {}", i.name);

        let model = item::ActiveModel {
            id: NotSet,
            owner_id: Set(i.owner_id),
            name: Set(i.name),
            description: Set(i.description),
            available: Set(i.available),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }
}

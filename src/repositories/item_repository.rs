use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    not_updated_as_not_found, BaseRepository, CrudRepository, OwnedRepository, Repository,
};
use crate::dto::item::{ItemPayload, VENDOR_FIELD};
use crate::entities::item::{self, Column, Entity as Item, Model as ItemModel};
use crate::entities::vendor::Entity as Vendor;
use crate::errors::ServiceError;
use crate::validation::FieldErrors;

/// Repository for item rows; items belong to a vendor
#[derive(Debug, Clone)]
pub struct ItemRepository {
    base: BaseRepository,
}

impl ItemRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository for ItemRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

#[async_trait]
impl CrudRepository for ItemRepository {
    type Record = ItemModel;
    type Payload = ItemPayload;

    const RESOURCE: &'static str = "Item";

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<ItemModel>, ServiceError> {
        Ok(Item::find().all(self.get_db()).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<ItemModel>, ServiceError> {
        Ok(Item::find_by_id(id).one(self.get_db()).await?)
    }

    #[instrument(skip(self, payload), fields(vendor_id = payload.vendor))]
    async fn create(&self, payload: ItemPayload) -> Result<ItemModel, ServiceError> {
        let active: item::ActiveModel = payload.into();
        let created = active.insert(self.get_db()).await?;
        info!("Item created: {} for vendor {}", created.id, created.vendor_id);
        Ok(created)
    }

    #[instrument(skip(self, payload), fields(vendor_id = payload.vendor))]
    async fn update(&self, id: i32, payload: ItemPayload) -> Result<ItemModel, ServiceError> {
        let mut active: item::ActiveModel = payload.into();
        active.id = Set(id);
        active
            .update(self.get_db())
            .await
            .map_err(|e| not_updated_as_not_found(e, Self::RESOURCE, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = Item::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }
        info!("Item deleted: {}", id);
        Ok(())
    }

    #[instrument(skip(self, payload), fields(vendor_id = payload.vendor))]
    async fn check_relations(&self, payload: &ItemPayload) -> Result<(), ServiceError> {
        let vendor = Vendor::find_by_id(payload.vendor)
            .one(self.get_db())
            .await?;

        if vendor.is_none() {
            return Err(FieldErrors::single(
                VENDOR_FIELD,
                format!("Invalid pk \"{}\" - object does not exist.", payload.vendor),
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl OwnedRepository for ItemRepository {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, vendor_id: i32) -> Result<Vec<ItemModel>, ServiceError> {
        Ok(Item::find()
            .filter(Column::VendorId.eq(vendor_id))
            .all(self.get_db())
            .await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id_and_owner(
        &self,
        id: i32,
        vendor_id: i32,
    ) -> Result<Option<ItemModel>, ServiceError> {
        Ok(Item::find_by_id(id)
            .filter(Column::VendorId.eq(vendor_id))
            .one(self.get_db())
            .await?)
    }
}

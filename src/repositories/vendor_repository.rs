use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{not_updated_as_not_found, BaseRepository, CrudRepository, Repository};
use crate::dto::VendorPayload;
use crate::entities::item::{self, Entity as Item};
use crate::entities::vendor::{self, Entity as Vendor, Model as VendorModel};
use crate::errors::ServiceError;

/// Repository for vendor rows
#[derive(Debug, Clone)]
pub struct VendorRepository {
    base: BaseRepository,
}

impl VendorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository for VendorRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

#[async_trait]
impl CrudRepository for VendorRepository {
    type Record = VendorModel;
    type Payload = VendorPayload;

    const RESOURCE: &'static str = "Vendor";

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<VendorModel>, ServiceError> {
        Ok(Vendor::find().all(self.get_db()).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<VendorModel>, ServiceError> {
        Ok(Vendor::find_by_id(id).one(self.get_db()).await?)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: VendorPayload) -> Result<VendorModel, ServiceError> {
        let active: vendor::ActiveModel = payload.into();
        let created = active.insert(self.get_db()).await?;
        info!("Vendor created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, id: i32, payload: VendorPayload) -> Result<VendorModel, ServiceError> {
        let mut active: vendor::ActiveModel = payload.into();
        active.id = Set(id);
        active
            .update(self.get_db())
            .await
            .map_err(|e| not_updated_as_not_found(e, Self::RESOURCE, id))
    }

    /// Removes the vendor together with the items it owns
    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.get_db().begin().await?;

        let items = Item::delete_many()
            .filter(item::Column::VendorId.eq(id))
            .exec(&txn)
            .await?;
        let result = Vendor::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }

        txn.commit().await?;
        info!(
            "Vendor deleted: {} ({} items removed)",
            id, items.rows_affected
        );
        Ok(())
    }
}

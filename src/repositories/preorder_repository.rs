use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{not_updated_as_not_found, BaseRepository, CrudRepository, Repository};
use crate::dto::PreorderPayload;
use crate::entities::preorder::{self, Entity as Preorder, Model as PreorderModel};
use crate::errors::ServiceError;

/// Repository for preorder rows
#[derive(Debug, Clone)]
pub struct PreorderRepository {
    base: BaseRepository,
}

impl PreorderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository for PreorderRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

#[async_trait]
impl CrudRepository for PreorderRepository {
    type Record = PreorderModel;
    type Payload = PreorderPayload;

    const RESOURCE: &'static str = "Preorder";

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<PreorderModel>, ServiceError> {
        Ok(Preorder::find().all(self.get_db()).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<PreorderModel>, ServiceError> {
        Ok(Preorder::find_by_id(id).one(self.get_db()).await?)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: PreorderPayload) -> Result<PreorderModel, ServiceError> {
        let active: preorder::ActiveModel = payload.into();
        let created = active.insert(self.get_db()).await?;
        info!("Preorder created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, id: i32, payload: PreorderPayload) -> Result<PreorderModel, ServiceError> {
        let mut active: preorder::ActiveModel = payload.into();
        active.id = Set(id);
        active
            .update(self.get_db())
            .await
            .map_err(|e| not_updated_as_not_found(e, Self::RESOURCE, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = Preorder::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }
        info!("Preorder deleted: {}", id);
        Ok(())
    }
}

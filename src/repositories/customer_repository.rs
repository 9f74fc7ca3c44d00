use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{not_updated_as_not_found, BaseRepository, CrudRepository, Repository};
use crate::dto::CustomerPayload;
use crate::entities::customer::{self, Entity as Customer, Model as CustomerModel};
use crate::errors::ServiceError;

/// Repository for customer rows
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository for CustomerRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

#[async_trait]
impl CrudRepository for CustomerRepository {
    type Record = CustomerModel;
    type Payload = CustomerPayload;

    const RESOURCE: &'static str = "Customer";

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<CustomerModel>, ServiceError> {
        Ok(Customer::find().all(self.get_db()).await?)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<CustomerModel>, ServiceError> {
        Ok(Customer::find_by_id(id).one(self.get_db()).await?)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: CustomerPayload) -> Result<CustomerModel, ServiceError> {
        let active: customer::ActiveModel = payload.into();
        let created = active.insert(self.get_db()).await?;
        info!("Customer created: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self, payload))]
    async fn update(&self, id: i32, payload: CustomerPayload) -> Result<CustomerModel, ServiceError> {
        let mut active: customer::ActiveModel = payload.into();
        active.id = Set(id);
        active
            .update(self.get_db())
            .await
            .map_err(|e| not_updated_as_not_found(e, Self::RESOURCE, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = Customer::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::RESOURCE, id));
        }
        info!("Customer deleted: {}", id);
        Ok(())
    }
}

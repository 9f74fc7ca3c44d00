use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;

use crate::errors::ServiceError;
use crate::validation::Schema;

pub mod customer_repository;
pub mod item_repository;
pub mod preorder_repository;
pub mod vendor_repository;

pub use customer_repository::CustomerRepository;
pub use item_repository::ItemRepository;
pub use preorder_repository::PreorderRepository;
pub use vendor_repository::VendorRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Storage contract for a resource addressed by an integer primary key
#[async_trait]
pub trait CrudRepository: Repository + Send + Sync {
    /// Stored row as returned to clients
    type Record: Serialize + Send;
    /// Decoded request body used for create and replace
    type Payload: Schema + Send + Sync;

    /// Human-readable resource name used in logs and errors
    const RESOURCE: &'static str;

    async fn list_all(&self) -> Result<Vec<Self::Record>, ServiceError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Self::Record>, ServiceError>;

    async fn create(&self, payload: Self::Payload) -> Result<Self::Record, ServiceError>;

    async fn update(&self, id: i32, payload: Self::Payload) -> Result<Self::Record, ServiceError>;

    async fn delete(&self, id: i32) -> Result<(), ServiceError>;

    /// Checks that need the store, such as foreign keys pointing at real rows.
    async fn check_relations(&self, _payload: &Self::Payload) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Repositories whose rows belong to an owning row
#[async_trait]
pub trait OwnedRepository: CrudRepository {
    async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Self::Record>, ServiceError>;

    async fn get_by_id_and_owner(
        &self,
        id: i32,
        owner_id: i32,
    ) -> Result<Option<Self::Record>, ServiceError>;
}

/// Maps "no row touched" outcomes of an update onto a not-found error
pub(crate) fn not_updated_as_not_found(
    err: sea_orm::DbErr,
    resource: &str,
    id: i32,
) -> ServiceError {
    match err {
        sea_orm::DbErr::RecordNotUpdated | sea_orm::DbErr::RecordNotFound(_) => {
            ServiceError::not_found(resource, id)
        }
        other => ServiceError::DatabaseError(other),
    }
}

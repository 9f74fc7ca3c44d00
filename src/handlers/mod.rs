pub mod common;
pub mod customers;
pub mod items;
pub mod preorders;
pub mod resource;
pub mod vendor_items;
pub mod vendors;

use crate::db::DbPool;
use crate::repositories::{
    CustomerRepository, ItemRepository, PreorderRepository, VendorRepository,
};
use std::sync::Arc;

/// Repositories used by HTTP handlers, one per resource
#[derive(Clone)]
pub struct AppServices {
    pub customers: Arc<CustomerRepository>,
    pub vendors: Arc<VendorRepository>,
    pub items: Arc<ItemRepository>,
    pub preorders: Arc<PreorderRepository>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            customers: Arc::new(CustomerRepository::new(db_pool.clone())),
            vendors: Arc::new(VendorRepository::new(db_pool.clone())),
            items: Arc::new(ItemRepository::new(db_pool.clone())),
            preorders: Arc::new(PreorderRepository::new(db_pool)),
        }
    }
}

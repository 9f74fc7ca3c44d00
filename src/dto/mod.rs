//! Request payloads. Each payload decodes from a raw JSON body through
//! [`Schema`](crate::validation::Schema) and carries its field rules.

pub mod customer;
pub mod item;
pub mod preorder;
pub mod vendor;

pub use customer::CustomerPayload;
pub use item::ItemPayload;
pub use preorder::PreorderPayload;
pub use vendor::VendorPayload;

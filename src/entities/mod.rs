pub mod customer;
pub mod item;
pub mod preorder;
pub mod vendor;

pub use customer::{Entity as Customer, Model as CustomerModel};
pub use item::{Entity as Item, Model as ItemModel};
pub use preorder::{Entity as Preorder, Model as PreorderModel};
pub use vendor::{Entity as Vendor, Model as VendorModel};

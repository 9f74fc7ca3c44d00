use rust_decimal::Decimal;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::item;
use crate::validation::{not_blank, validate_price, FieldErrors, FieldReader, Schema};

/// Name of the field holding the owning vendor's id
pub const VENDOR_FIELD: &str = "vendor";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct ItemPayload {
    /// Owning vendor's id
    #[schema(example = 1)]
    pub vendor: i32,
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(example = "Apple")]
    pub name: String,
    #[validate(length(max = 1000, message = "Ensure this field has no more than 1000 characters."))]
    pub description: Option<String>,
    #[validate(custom = "validate_price")]
    #[schema(value_type = String, example = "1.00")]
    pub price: Decimal,
    /// Units on hand; defaults to 0
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    #[serde(default)]
    pub quantity: i32,
}

impl Schema for ItemPayload {
    fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(raw)?;
        let vendor = fields.required(VENDOR_FIELD);
        let name = fields.required("name");
        let description = fields.optional("description");
        let price = fields.required("price");
        let quantity = fields.optional("quantity");

        fields.finish(|| ItemPayload {
            vendor: vendor.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description,
            price: price.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
        })
    }
}

impl ItemPayload {
    /// Decodes a body on a vendor-scoped route; the route's vendor replaces
    /// whatever the body says.
    pub fn decode_for_vendor(raw: &Value, vendor_id: i32) -> Result<Self, FieldErrors> {
        let mut raw = raw.clone();
        if let Value::Object(object) = &mut raw {
            object.insert(VENDOR_FIELD.to_string(), Value::from(vendor_id));
        }
        Self::decode(&raw)
    }
}

impl From<ItemPayload> for item::ActiveModel {
    fn from(payload: ItemPayload) -> Self {
        Self {
            id: NotSet,
            vendor_id: Set(payload.vendor),
            name: Set(payload.name),
            description: Set(payload.description),
            price: Set(payload.price),
            quantity: Set(payload.quantity),
        }
    }
}

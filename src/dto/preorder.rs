use chrono::NaiveDate;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::preorder;
use crate::validation::{not_blank, FieldErrors, FieldReader, Schema};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct PreorderPayload {
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub customer_name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub customer_email: String,
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub item_name: String,
    #[validate(range(
        min = 1,
        max = 1000,
        message = "Ensure this value is between 1 and 1000."
    ))]
    pub quantity: i32,
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub pickup_date: NaiveDate,
    #[validate(length(max = 500, message = "Ensure this field has no more than 500 characters."))]
    pub notes: Option<String>,
}

impl Schema for PreorderPayload {
    fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(raw)?;
        let customer_name = fields.required("customer_name");
        let customer_email = fields.required("customer_email");
        let item_name = fields.required("item_name");
        let quantity = fields.required("quantity");
        let pickup_date = fields.required("pickup_date");
        let notes = fields.optional("notes");

        fields.finish(|| PreorderPayload {
            customer_name: customer_name.unwrap_or_default(),
            customer_email: customer_email.unwrap_or_default(),
            item_name: item_name.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
            pickup_date: pickup_date.unwrap_or_default(),
            notes,
        })
    }
}

impl From<PreorderPayload> for preorder::ActiveModel {
    fn from(payload: PreorderPayload) -> Self {
        Self {
            id: NotSet,
            customer_name: Set(payload.customer_name),
            customer_email: Set(payload.customer_email),
            item_name: Set(payload.item_name),
            quantity: Set(payload.quantity),
            pickup_date: Set(payload.pickup_date),
            notes: Set(payload.notes),
        }
    }
}

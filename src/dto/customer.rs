use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::customer;
use crate::validation::{not_blank, FieldErrors, FieldReader, Schema};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct CustomerPayload {
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub address: Option<String>,
}

impl Schema for CustomerPayload {
    fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(raw)?;
        let first_name = fields.required("first_name");
        let last_name = fields.required("last_name");
        let email = fields.required("email");
        let phone = fields.optional("phone");
        let address = fields.optional("address");

        fields.finish(|| CustomerPayload {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            address,
        })
    }
}

impl From<CustomerPayload> for customer::ActiveModel {
    fn from(payload: CustomerPayload) -> Self {
        Self {
            id: NotSet,
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            phone: Set(payload.phone),
            address: Set(payload.address),
        }
    }
}

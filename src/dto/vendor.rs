use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::vendor;
use crate::validation::{not_blank, FieldErrors, FieldReader, Schema};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct VendorPayload {
    #[validate(
        custom = "not_blank",
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(example = "Acme")]
    pub name: String,
    #[validate(length(max = 1000, message = "Ensure this field has no more than 1000 characters."))]
    pub description: Option<String>,
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "Ensure this field has no more than 20 characters."))]
    pub phone: Option<String>,
    #[validate(
        url(message = "Enter a valid URL."),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub website: Option<String>,
}

impl Schema for VendorPayload {
    fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(raw)?;
        let name = fields.required("name");
        let description = fields.optional("description");
        let email = fields.optional("email");
        let phone = fields.optional("phone");
        let website = fields.optional("website");

        fields.finish(|| VendorPayload {
            name: name.unwrap_or_default(),
            description,
            email,
            phone,
            website,
        })
    }
}

impl From<VendorPayload> for vendor::ActiveModel {
    fn from(payload: VendorPayload) -> Self {
        Self {
            id: NotSet,
            name: Set(payload.name),
            description: Set(payload.description),
            email: Set(payload.email),
            phone: Set(payload.phone),
            website: Set(payload.website),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NOT_BLANK;
    use serde_json::json;

    #[test]
    fn name_is_enough() {
        let payload = VendorPayload::decode(&json!({"name": "Acme"})).unwrap();
        assert_eq!(payload.name, "Acme");
        assert!(payload.website.is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = VendorPayload::decode(&json!({"name": ""})).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NOT_BLANK.to_string()][..]));
    }

    #[test]
    fn optional_contact_fields_are_checked_when_present() {
        let errors = VendorPayload::decode(&json!({
            "name": "Acme",
            "email": "acme",
            "website": "not a url"
        }))
        .unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("website").is_some());
    }

    #[test]
    fn contact_fields_fit_their_columns() {
        let email = format!(
            "{}@{}.{}.{}.com",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(63)
        );
        let website = format!("https://{}.com/", "w".repeat(250));
        let errors = VendorPayload::decode(&json!({
            "name": "Acme",
            "email": email,
            "website": website
        }))
        .unwrap_err();
        assert_eq!(
            errors.get("email"),
            Some(&["Ensure this field has no more than 254 characters.".to_string()][..])
        );
        assert_eq!(
            errors.get("website"),
            Some(&["Ensure this field has no more than 200 characters.".to_string()][..])
        );
    }

    #[test]
    fn null_optional_fields_are_accepted() {
        let payload =
            VendorPayload::decode(&json!({"name": "Acme", "email": null, "phone": null})).unwrap();
        assert!(payload.email.is_none());
    }
}

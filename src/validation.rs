//! Payload decoding and field validation.
//!
//! Request bodies are decoded field by field into typed drafts. Missing,
//! null and mistyped fields are reported per field; the drafts then run
//! their `validator` rules and the failures of the remaining fields are
//! merged into the same field-error map that is returned with a 400.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Key used for errors that do not belong to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";

/// Field name → list of human-readable messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = json!({"email": ["Enter a valid email address."]}))]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&rendered)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut mapped = FieldErrors::new();
        for (field, failures) in errors.field_errors() {
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", failure.code));
                mapped.add(field, message);
            }
        }
        mapped
    }
}

/// A draft that can be decoded from a raw JSON request body
pub trait Schema: Sized {
    fn decode(raw: &Value) -> Result<Self, FieldErrors>;
}

/// A scalar type a payload field can hold
pub trait FieldValue: Sized {
    /// Message reported when the JSON value has the wrong shape
    const INVALID: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    const INVALID: &'static str = "Not a valid string.";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for i32 {
    const INVALID: &'static str = "A valid integer is required.";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FieldValue for Decimal {
    const INVALID: &'static str = "A valid number is required.";

    fn from_json(value: &Value) -> Option<Self> {
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_string(),
            _ => return None,
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

impl FieldValue for NaiveDate {
    const INVALID: &'static str =
        "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
    }
}

/// Reads typed fields out of a JSON object, collecting per-field errors
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a Value) -> Result<Self, FieldErrors> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                errors: FieldErrors::new(),
            }),
            other => Err(FieldErrors::single(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_kind(other)
                ),
            )),
        }
    }

    /// A field that must be present and non-null
    pub fn required<T: FieldValue>(&mut self, name: &str) -> Option<T> {
        match self.object.get(name) {
            None => {
                self.errors.add(name, REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.errors.add(name, NOT_NULL);
                None
            }
            Some(value) => self.decode(name, value),
        }
    }

    /// A field that may be omitted or null
    pub fn optional<T: FieldValue>(&mut self, name: &str) -> Option<T> {
        match self.object.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.decode(name, value),
        }
    }

    fn decode<T: FieldValue>(&mut self, name: &str, value: &Value) -> Option<T> {
        let decoded = T::from_json(value);
        if decoded.is_none() {
            self.errors.add(name, T::INVALID);
        }
        decoded
    }

    /// Builds the draft and applies its rules. Fields that failed to decode
    /// are filled with defaults by `build`; rule failures on those fields are
    /// dropped so each field reports its decoding error only.
    pub fn finish<T, F>(self, build: F) -> Result<T, FieldErrors>
    where
        T: Validate,
        F: FnOnce() -> T,
    {
        let mut errors = self.errors;
        let draft = build();

        if let Err(rule_errors) = draft.validate() {
            for (field, messages) in FieldErrors::from(rule_errors).0 {
                if !errors.0.contains_key(&field) {
                    errors.0.insert(field, messages);
                }
            }
        }

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn rule_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("blank", NOT_BLANK.to_string()));
    }
    Ok(())
}

/// Money amounts: non-negative, at most 10 digits with 2 decimal places
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    const MAX_DIGITS: usize = 10;
    const DECIMAL_PLACES: u32 = 2;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(rule_error(
            "min_value",
            "Ensure this value is greater than or equal to 0.".to_string(),
        ));
    }

    let normalized = price.normalize();
    if normalized.scale() > DECIMAL_PLACES {
        return Err(rule_error(
            "max_decimal_places",
            format!(
                "Ensure that there are no more than {} decimal places.",
                DECIMAL_PLACES
            ),
        ));
    }

    let digits = normalized.mantissa().unsigned_abs().to_string().len();
    let whole_digits = digits.saturating_sub(normalized.scale() as usize);
    if whole_digits > MAX_DIGITS - DECIMAL_PLACES as usize {
        return Err(rule_error(
            "max_digits",
            format!(
                "Ensure that there are no more than {} digits in total.",
                MAX_DIGITS
            ),
        ));
    }

    Ok(())
}

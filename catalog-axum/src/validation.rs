//! Ordered, accumulating field validators for the product endpoints.
//!
//! Each validator is a pure function from the loosely-typed request payload
//! to zero or more structured failures. A chain runs every validator and
//! concatenates the results, so a request with several invalid fields
//! reports all of them in a single round trip instead of one at a time.

use catalog_core::models::{NewProduct, ProductId, ProductUpdate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field-validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[schemars(inline)]
pub struct FieldError {
    /// The offending field
    pub field: &'static str,
    /// Human-readable description of the failure
    pub message: &'static str,
}

/// Request body for create and update, kept loosely typed.
///
/// Fields stay raw JSON values so a mistyped field turns into a validation
/// failure in the response instead of a deserialization rejection that
/// would short-circuit the rest of the chain.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[schemars(inline)]
pub(crate) struct ProductPayload {
    /// Display name of the product
    #[serde(default)]
    pub name: Option<Value>,
    /// Unit price, strictly positive
    #[serde(default)]
    pub price: Option<Value>,
    /// Whether the product is offered (full update only)
    #[serde(default)]
    pub availability: Option<Value>,
}

/// Numeric reading of a raw value: a JSON number, or a string holding one.
fn numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn name_required(payload: &ProductPayload) -> Vec<FieldError> {
    match payload.name.as_ref().and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => Vec::new(),
        _ => vec![FieldError {
            field: "name",
            message: "El nombre del producto es obligatorio",
        }],
    }
}

// only fires on a present, non-blank name, so absent-name requests keep
// reporting exactly one name failure
fn name_length(payload: &ProductPayload) -> Vec<FieldError> {
    match payload.name.as_ref().and_then(Value::as_str) {
        Some(name) if name.chars().count() > 100 => vec![FieldError {
            field: "name",
            message: "El nombre no puede exceder los 100 caracteres",
        }],
        _ => Vec::new(),
    }
}

fn price_numeric(payload: &ProductPayload) -> Vec<FieldError> {
    match numeric(payload.price.as_ref()) {
        Some(_) => Vec::new(),
        None => vec![FieldError {
            field: "price",
            message: "Formato inválido",
        }],
    }
}

fn price_required(payload: &ProductPayload) -> Vec<FieldError> {
    match payload.price {
        Some(_) => Vec::new(),
        None => vec![FieldError {
            field: "price",
            message: "El precio del producto es obligatorio",
        }],
    }
}

fn price_positive(payload: &ProductPayload) -> Vec<FieldError> {
    match numeric(payload.price.as_ref()) {
        Some(price) if price > 0.0 => Vec::new(),
        _ => vec![FieldError {
            field: "price",
            message: "El precio debe ser mayor a cero",
        }],
    }
}

fn availability_boolean(payload: &ProductPayload) -> Vec<FieldError> {
    match payload.availability {
        Some(Value::Bool(_)) => Vec::new(),
        _ => vec![FieldError {
            field: "availability",
            message: "Valor para disponibilidad no válido",
        }],
    }
}

/// The creation chain: name non-empty and at most 100 characters, price
/// numeric, present and positive.
pub(crate) fn validate_create(payload: &ProductPayload) -> Vec<FieldError> {
    [
        name_required,
        name_length,
        price_numeric,
        price_required,
        price_positive,
    ]
    .iter()
    .flat_map(|check| check(payload))
    .collect()
}

/// The full-update chain: the creation chain plus a boolean availability.
pub(crate) fn validate_update(payload: &ProductPayload) -> Vec<FieldError> {
    validate_create(payload)
        .into_iter()
        .chain(availability_boolean(payload))
        .collect()
}

/// Path ids must be integer strings; anything else is a 400, not a 404.
pub(crate) fn validate_id(raw: &str) -> Result<ProductId, FieldError> {
    raw.parse().map_err(|_| FieldError {
        field: "id",
        message: "ID no válido",
    })
}

impl ProductPayload {
    /// Extract the creation fields. Only meaningful after
    /// [`validate_create`] returned no failures.
    pub(crate) fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: name_of(&self.name),
            price: numeric(self.price.as_ref()).unwrap_or_default(),
        }
    }

    /// Extract the replacement fields. Only meaningful after
    /// [`validate_update`] returned no failures.
    pub(crate) fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: name_of(&self.name),
            price: numeric(self.price.as_ref()).unwrap_or_default(),
            availability: matches!(self.availability, Some(Value::Bool(true))),
        }
    }
}

fn name_of(value: &Option<Value>) -> String {
    value
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProductPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_body_accumulates_four_failures() {
        let errors = validate_create(&payload(json!({})));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn non_positive_price_is_a_single_failure() {
        let errors = validate_create(&payload(json!({
            "name": "Mouse Testing",
            "price": -12,
        })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "El precio debe ser mayor a cero");
    }

    #[test]
    fn non_numeric_price_is_two_failures() {
        let errors = validate_create(&payload(json!({
            "name": "Mouse Testing",
            "price": "Hello",
        })));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Formato inválido");
        assert_eq!(errors[1].message, "El precio debe ser mayor a cero");
    }

    #[test]
    fn numeric_string_price_is_accepted() {
        let errors = validate_create(&payload(json!({
            "name": "Mouse Testing",
            "price": "50",
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = validate_create(&payload(json!({
            "name": "   ",
            "price": 50,
        })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn names_longer_than_100_characters_are_rejected() {
        let errors = validate_create(&payload(json!({
            "name": "x".repeat(150),
            "price": 10,
        })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(
            errors[0].message,
            "El nombre no puede exceder los 100 caracteres"
        );

        // exactly 100 characters is still fine
        let errors = validate_create(&payload(json!({
            "name": "x".repeat(100),
            "price": 10,
        })));
        assert!(errors.is_empty());

        // an absent name keeps reporting a single name failure
        let errors = validate_create(&payload(json!({ "price": 10 })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "El nombre del producto es obligatorio");
    }

    #[test]
    fn update_requires_a_boolean_availability() {
        let errors = validate_update(&payload(json!({
            "name": "Mouse Testing",
            "price": 50,
            "availability": "si",
        })));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "availability");

        let errors = validate_update(&payload(json!({
            "name": "Mouse Testing",
            "price": 50,
            "availability": false,
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn ids_must_be_integer_strings() {
        assert_eq!(validate_id("42"), Ok(42));
        assert_eq!(validate_id("-3"), Ok(-3));
        assert!(validate_id("12.5").is_err());
        assert!(validate_id("not-a-number").is_err());
    }

    #[test]
    fn validated_payload_extracts_domain_fields() {
        let update = payload(json!({
            "name": "Monitor Curvo",
            "price": "299.99",
            "availability": true,
        }))
        .into_update();

        assert_eq!(update.name, "Monitor Curvo");
        assert_eq!(update.price, 299.99);
        assert!(update.availability);
    }
}

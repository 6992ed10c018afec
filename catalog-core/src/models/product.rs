/// Surrogate primary key for a product, assigned by the store.
pub type ProductId = i64;

/// A single product record.
///
/// This is the sole entity in the system: one row in the `products` table,
/// with no relations to anything else. The `id` is immutable once assigned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Product {
    /// Store-assigned identifier
    pub id: ProductId,
    /// Display name, at most 100 characters
    pub name: String,
    /// Unit price, strictly positive (enforced at the validation layer)
    pub price: f64,
    /// Whether the product is currently offered
    pub availability: bool,
}

/// The fields a client supplies when creating a product.
///
/// `availability` is not part of the creation contract; it defaults to
/// `true` in the store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewProduct {
    /// Display name, non-empty
    pub name: String,
    /// Unit price, strictly positive
    pub price: f64,
}

/// A full-field replacement for an existing product.
///
/// Every field is required: a `PUT` replaces the record wholesale rather
/// than patching individual fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductUpdate {
    /// Replacement display name
    pub name: String,
    /// Replacement unit price
    pub price: f64,
    /// Replacement availability flag
    pub availability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_flat_fields() {
        let product = Product {
            id: 1,
            name: "Monitor Curvo".into(),
            price: 300.0,
            availability: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Monitor Curvo",
                "price": 300.0,
                "availability": true,
            })
        );
    }
}

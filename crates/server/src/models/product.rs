//! Product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adorly_core::{Category, ProductId};

/// A purchasable catalog product.
///
/// Prices serialize as plain JSON numbers (the storefront UI expects
/// `"price": 85.0`, not a string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID, assigned on creation.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: String,
    pub category: Category,
}

/// Fields for creating or replacing a product.
///
/// All fields are required; partial bodies are rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: String,
    pub category: Category,
}

impl NewProduct {
    /// Attach an ID to produce a full [`Product`].
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_serializes_as_number() {
        let product = Product {
            id: ProductId::new(1),
            name: "Rose Elegance".to_string(),
            description: "A delicate floral scent.".to_string(),
            price: Decimal::new(8500, 2),
            image_url: "https://picsum.photos/seed/perfume1/400/400".to_string(),
            category: Category::Perfume,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(85.0));
        assert_eq!(json["category"], "Perfume");
    }

    #[test]
    fn test_new_product_requires_all_fields() {
        let missing_price = serde_json::json!({
            "name": "X",
            "description": "d",
            "image_url": "http://x",
            "category": "Phone"
        });
        assert!(serde_json::from_value::<NewProduct>(missing_price).is_err());
    }

    #[test]
    fn test_new_product_accepts_integer_price() {
        let body = serde_json::json!({
            "name": "X",
            "description": "d",
            "price": 10,
            "image_url": "http://x",
            "category": "Phone"
        });
        let parsed: NewProduct = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.price, Decimal::new(10, 0));
    }
}

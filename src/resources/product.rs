//! Catalog records: products, their images, and categories.
//!
//! # Example
//!
//! ```rust
//! use jewelry_api::resources::ProductFilters;
//!
//! let filters = ProductFilters {
//!     category_id: Some(5),
//!     material: Some("gold".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(filters.to_query_string(), "category_id=5&material=gold");
//! ```

use serde::{Deserialize, Serialize};

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductImage {
    /// The image ID.
    #[serde(default)]
    pub id: u64,

    /// The owning product.
    #[serde(default)]
    pub product_id: u64,

    /// Path of the image, relative to the backend's static root.
    pub image_path: String,

    /// Sort order within the product gallery.
    #[serde(default)]
    pub display_order: i64,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// The category ID.
    pub id: u64,

    /// The category name.
    pub name: String,

    /// The parent category, if this is a subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

/// A category together with its direct subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryWithSubcategories {
    /// The category itself.
    #[serde(flatten)]
    pub category: Category,

    /// Direct children of the category.
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

/// A piece of jewelry offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The product ID.
    pub id: u64,

    /// The product name.
    pub name: String,

    /// Metal or base material (e.g. "Gold").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Purity grade (e.g. "18K").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karat: Option<String>,

    /// Weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Unit price in USD.
    pub price: f64,

    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: i64,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Main image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// The jeweler selling the product.
    #[serde(default)]
    pub jeweler_id: u64,

    /// Gallery images.
    #[serde(default)]
    pub images: Vec<ProductImage>,

    /// Categories the product is listed under.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Product {
    /// Returns `true` if at least `quantity` units are in stock.
    #[must_use]
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock_quantity >= i64::from(quantity)
    }
}

/// Filters for `GET /api/products/`.
///
/// Parameters are emitted in a fixed order: `category_id`, `material`,
/// `min_price`, `max_price`, then `jeweler_id`, `skip`, `limit`. Unset
/// filters are omitted, and so are zero numbers and empty strings: a filter of
/// `min_price = 0` is the same as no lower bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Only products in this category.
    pub category_id: Option<u64>,

    /// Only products whose material contains this text.
    pub material: Option<String>,

    /// Lower price bound.
    pub min_price: Option<f64>,

    /// Upper price bound.
    pub max_price: Option<f64>,

    /// Only products from this jeweler.
    pub jeweler_id: Option<u64>,

    /// Number of products to skip.
    pub skip: Option<u64>,

    /// Maximum number of products to return.
    pub limit: Option<u64>,
}

impl ProductFilters {
    /// Returns the filters as ordered query pairs, omitting unset and empty values.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                query.push((key.to_string(), value));
            }
        };

        push("category_id", nonzero(self.category_id));
        push(
            "material",
            self.material.clone().filter(|material| !material.is_empty()),
        );
        push("min_price", nonzero_price(self.min_price));
        push("max_price", nonzero_price(self.max_price));
        push("jeweler_id", nonzero(self.jeweler_id));
        push("skip", nonzero(self.skip));
        push("limit", nonzero(self.limit));
        query
    }

    /// Returns the filters as a percent-encoded query string (without `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_query()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn nonzero(value: Option<u64>) -> Option<String> {
    value.filter(|v| *v != 0).map(|v| v.to_string())
}

fn nonzero_price(value: Option<f64>) -> Option<String> {
    value
        .filter(|v| *v != 0.0 && !v.is_nan())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_filter_produces_single_param() {
        let filters = ProductFilters {
            category_id: Some(5),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![("category_id".to_string(), "5".to_string())]
        );
    }

    #[test]
    fn test_filters_keep_fixed_order() {
        let filters = ProductFilters {
            max_price: Some(500.0),
            material: Some("silver".to_string()),
            min_price: Some(99.5),
            category_id: Some(2),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "category_id=2&material=silver&min_price=99.5&max_price=500"
        );
    }

    #[test]
    fn test_falsy_filters_are_omitted() {
        let filters = ProductFilters {
            category_id: Some(0),
            material: Some(String::new()),
            min_price: Some(0.0),
            max_price: None,
            ..Default::default()
        };
        assert!(filters.to_query().is_empty());
        assert_eq!(filters.to_query_string(), "");
    }

    #[test]
    fn test_filter_values_are_percent_encoded() {
        let filters = ProductFilters {
            material: Some("white gold & pearl".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "material=white%20gold%20%26%20pearl"
        );
    }

    #[test]
    fn test_backend_listing_params_follow_fixed_keys() {
        let filters = ProductFilters {
            limit: Some(20),
            jeweler_id: Some(3),
            category_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query_string(),
            "category_id=1&jeweler_id=3&limit=20"
        );
    }

    #[test]
    fn test_product_deserializes_backend_response() {
        let product: Product = serde_json::from_value(json!({
            "id": 9,
            "name": "Solitaire Ring",
            "material": "Gold",
            "karat": "18K",
            "weight": 3.2,
            "price": 1250.0,
            "stock_quantity": 4,
            "description": null,
            "image_path": "static/products/ring.png",
            "jeweler_id": 2,
            "images": [{"id": 1, "product_id": 9, "image_path": "a.png", "display_order": 0}],
            "categories": [{"id": 3, "name": "Rings", "parent_id": null}]
        }))
        .unwrap();

        assert_eq!(product.name, "Solitaire Ring");
        assert!(product.description.is_none());
        assert_eq!(product.images.len(), 1);
        assert_eq!(product.categories[0].name, "Rings");
        assert!(product.has_stock_for(4));
        assert!(!product.has_stock_for(5));
    }

    #[test]
    fn test_category_with_subcategories_flattens_parent() {
        let category: CategoryWithSubcategories = serde_json::from_value(json!({
            "id": 1,
            "name": "Rings",
            "parent_id": null,
            "subcategories": [{"id": 4, "name": "Engagement", "parent_id": 1}]
        }))
        .unwrap();

        assert_eq!(category.category.name, "Rings");
        assert_eq!(category.subcategories[0].parent_id, Some(1));
    }
}

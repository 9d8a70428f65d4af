//! Public catalog endpoints. These never carry the session.

use super::client::StoreClient;
use crate::clients::{ApiError, HttpMethod, HttpRequest};
use crate::resources::{Category, CategoryWithSubcategories, Jeweler, Product, ProductFilters};

const PRODUCTS_PATH: &str = "/api/products/";
const CATEGORIES_PATH: &str = "/api/products/categories/";
const JEWELERS_PATH: &str = "/api/ai/jewelers";
const HEALTH_PATH: &str = "/health";

impl StoreClient {
    /// Lists products matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status, or an
    /// unexpected body.
    pub async fn list_products(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCTS_PATH)
            .query(filters.to_query())
            .build()?;
        self.public_typed(request).await
    }

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] with status 404 for an unknown product.
    pub async fn get_product(&self, product_id: u64) -> Result<Product, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{PRODUCTS_PATH}{product_id}")).build()?;
        self.public_typed(request).await
    }

    /// Lists all categories.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or a non-2xx status.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, CATEGORIES_PATH).build()?;
        self.public_typed(request).await
    }

    /// Fetches a category with its direct subcategories.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] with status 404 for an unknown category.
    pub async fn get_category(
        &self,
        category_id: u64,
    ) -> Result<CategoryWithSubcategories, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{CATEGORIES_PATH}{category_id}"))
                .build()?;
        self.public_typed(request).await
    }

    /// Lists jewelers who accept custom design requests.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or a non-2xx status.
    pub async fn list_jewelers(&self) -> Result<Vec<Jeweler>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, JEWELERS_PATH).build()?;
        self.public_typed(request).await
    }

    /// Returns `true` if the backend reports itself healthy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the backend cannot be reached.
    pub async fn health(&self) -> Result<bool, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, HEALTH_PATH).build()?;
        let response = self.http_client().request(request).await?;
        Ok(response.is_ok()
            && response.body.get("status").and_then(serde_json::Value::as_str) == Some("healthy"))
    }
}

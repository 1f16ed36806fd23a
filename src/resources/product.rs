//! Product endpoints (`/api/product`).

use serde_json::Value;

use super::{criteria_query, entity_path};
use crate::clients::{ApiError, ShopwareClient};

/// Product collection path.
pub const PRODUCT_PATH: &str = "/api/product";

impl ShopwareClient {
    /// Lists products matching `criteria`.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn get_products(&self, criteria: Option<Value>) -> Result<Value, ApiError> {
        self.get(PRODUCT_PATH, criteria_query(criteria)).await
    }

    /// Fetches a single product by ID.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn get_product(&self, product_id: &str) -> Result<Value, ApiError> {
        self.get(&entity_path(PRODUCT_PATH, product_id), None).await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn create_product(&self, product: Value) -> Result<Value, ApiError> {
        self.post(PRODUCT_PATH, product).await
    }

    /// Partially updates a product.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn update_product(&self, product_id: &str, changes: Value) -> Result<Value, ApiError> {
        self.patch(&entity_path(PRODUCT_PATH, product_id), changes)
            .await
    }

    /// Deletes a product. The shop answers `204`, so this returns `{}`.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn delete_product(&self, product_id: &str) -> Result<Value, ApiError> {
        self.delete(&entity_path(PRODUCT_PATH, product_id)).await
    }
}

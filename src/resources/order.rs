//! Order endpoints (`/api/order`).

use serde_json::Value;

use super::{criteria_query, entity_path};
use crate::clients::{ApiError, ShopwareClient};

/// Order collection path.
pub const ORDER_PATH: &str = "/api/order";

impl ShopwareClient {
    /// Lists orders matching `criteria`.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn get_orders(&self, criteria: Option<Value>) -> Result<Value, ApiError> {
        self.get(ORDER_PATH, criteria_query(criteria)).await
    }

    /// Fetches a single order by ID.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn get_order(&self, order_id: &str) -> Result<Value, ApiError> {
        self.get(&entity_path(ORDER_PATH, order_id), None).await
    }
}

//! Customer endpoints (`/api/customer`).

use serde_json::Value;

use super::criteria_query;
use crate::clients::{ApiError, ShopwareClient};

/// Customer collection path.
pub const CUSTOMER_PATH: &str = "/api/customer";

impl ShopwareClient {
    /// Lists customers matching `criteria`.
    ///
    /// # Errors
    ///
    /// See [`ShopwareClient::request`].
    pub async fn get_customers(&self, criteria: Option<Value>) -> Result<Value, ApiError> {
        self.get(CUSTOMER_PATH, criteria_query(criteria)).await
    }
}

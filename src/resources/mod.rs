//! Resource helpers for the Admin API.
//!
//! Thin wrappers over [`ShopwareClient`](crate::ShopwareClient) that fix the
//! endpoint path for a resource. They return the raw decoded JSON; no entity
//! types are imposed on the caller.
//!
//! | Resource | Helpers |
//! |----------|---------|
//! | Product  | `get_products`, `get_product`, `create_product`, `update_product`, `delete_product` |
//! | Order    | `get_orders`, `get_order` |
//! | Customer | `get_customers` |
//!
//! List helpers send the search criteria as the `criteria` query parameter,
//! e.g. `{"limit": 5}` is sent as `criteria[limit]=5`.

mod customer;
mod order;
mod product;

pub use customer::CUSTOMER_PATH;
pub use order::ORDER_PATH;
pub use product::PRODUCT_PATH;

use serde_json::{json, Value};

/// Wraps list criteria into the query object sent to list endpoints.
pub(crate) fn criteria_query(criteria: Option<Value>) -> Option<Value> {
    criteria.map(|criteria| json!({ "criteria": criteria }))
}

/// Builds `<collection>/<id>`.
pub(crate) fn entity_path(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

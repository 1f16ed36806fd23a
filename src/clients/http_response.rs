//! HTTP response type for the Shopware 6 API client.

use std::collections::HashMap;

use serde_json::Value;

/// A decoded 2xx response from the shop.
///
/// The body is schema-agnostic JSON. Objects keep the key order the shop
/// sent. An empty body (e.g. `204 No Content`) decodes to an empty object.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }
}

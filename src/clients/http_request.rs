//! HTTP request types for the Shopware 6 API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, the
//! transient descriptor of one API call.

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Admin API client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An API request to be sent to the shop.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use shopware6_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/api/product")
///     .body(json!({"name": "New Product", "productNumber": "NP-001", "stock": 100}))
///     .header("sw-language-id", "2fbb5fe2e29a4d70aa5854ce7ce3e20b")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/api/product");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path relative to the shop base URL.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<Value>,
    /// Query parameters; must be a JSON object when present.
    pub query: Option<Value>,
    /// Additional headers in the order they were added, applied after the
    /// client's defaults. A later entry replaces an earlier one with the same
    /// case-insensitive name.
    pub extra_headers: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidQuery`] if `query` is present
    /// but is not a JSON object.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match &self.query {
            None | Some(Value::Object(_)) => Ok(()),
            Some(other) => Err(InvalidHttpRequestError::InvalidQuery {
                kind: json_kind(other),
            }),
        }
    }

    /// Returns the query parameters as an object, if set.
    #[must_use]
    pub fn query_object(&self) -> Option<&Map<String, Value>> {
        self.query.as_ref().and_then(Value::as_object)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Option<Value>,
    extra_headers: Option<Vec<(String, String)>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    ///
    /// Nested objects and arrays are sent in bracket notation, e.g.
    /// `{"criteria": {"limit": 5}}` becomes `criteria[limit]=5`.
    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Adds a single query parameter.
    ///
    /// If a non-object query was set earlier it is replaced.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if !matches!(self.query, Some(Value::Object(_))) {
            self.query = Some(Value::Object(Map::new()));
        }
        if let Some(Value::Object(map)) = self.query.as_mut() {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Appends several extra headers, keeping their iteration order.
    #[must_use]
    pub fn extra_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_headers
            .get_or_insert_with(Vec::new)
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

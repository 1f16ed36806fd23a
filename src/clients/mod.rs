//! HTTP client types for Shopware 6 Admin API communication.
//!
//! # Overview
//!
//! - [`ShopwareClient`]: The Admin API client; manages the bearer token and
//!   dispatches requests
//! - [`HttpClient`]: The transport layer for a single HTTP round trip
//! - [`HttpRequest`]: A request descriptor (method, path, body, query, headers)
//! - [`HttpResponse`]: A decoded response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`ApiError`] / [`HttpError`]: Error types
//!
//! # Retry Behavior
//!
//! The only automatic retry is the single resend after a `401 Unauthorized`,
//! preceded by a token refresh. There is no backoff and no retry of other
//! status codes.

pub mod admin;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod query;

pub use admin::{ApiError, ShopwareClient, ShopwareClientBuilder};
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

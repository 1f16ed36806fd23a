//! HTTP-specific error types for the Shopware 6 API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the shop
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopware6_api::clients::HttpError;
//!
//! match http_client.send(&request, &token).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody { code, message }) => println!("{code}: {message}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` is the raw response body, which for the Admin API is a JSON
/// document with an `errors` array.
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Query parameters were given as something other than a JSON object.
    #[error("Query parameters must be a JSON object, got {kind}.")]
    InvalidQuery {
        /// The JSON type that was provided.
        kind: &'static str,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body is not valid JSON.
    #[error("Response with status {code} is not valid JSON: {message}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The decoder error.
        message: String,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            Self::InvalidRequest(_) => None,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Returns `true` if the shop answered `401 Unauthorized`.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

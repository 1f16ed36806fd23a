//! Error types for the Admin API client.

use thiserror::Error;

use crate::auth::oauth::OAuthError;
use crate::clients::HttpError;

/// Errors returned by [`ShopwareClient`](crate::ShopwareClient) requests.
///
/// # Example
///
/// ```rust,ignore
/// use shopware6_api::{ApiError, OAuthError};
///
/// match client.get("/api/product", None).await {
///     Ok(body) => println!("{body}"),
///     Err(ApiError::OAuth(OAuthError::AuthenticationFailed { status, .. })) => {
///         eprintln!("Check the integration credentials ({status})");
///     }
///     Err(ApiError::RequestFailed { source, after_refresh }) => {
///         eprintln!("Request failed (retried: {after_refresh}): {source}");
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Obtaining or refreshing the bearer token failed.
    #[error(transparent)]
    OAuth(#[from] OAuthError),

    /// The API call itself failed.
    ///
    /// `after_refresh` is `true` when the first attempt was rejected with
    /// `401`, the token was refreshed, and the single resend failed too.
    #[error("API request failed: {source}")]
    RequestFailed {
        /// The transport-level failure.
        source: HttpError,
        /// Whether the failure happened on the resend after a token refresh.
        after_refresh: bool,
    },
}

impl ApiError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::OAuth(e) => e.status(),
            Self::RequestFailed { source, .. } => source.status(),
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

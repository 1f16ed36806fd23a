//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::AuthenticationFailed`]: The client-credentials grant failed
//! - [`OAuthError::MissingRefreshToken`]: A refresh was requested before any
//!   successful authentication
//! - [`OAuthError::TokenRefreshFailed`]: The refresh-token grant failed
//!
//! # Example
//!
//! ```rust
//! use shopware6_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::AuthenticationFailed {
//!     status: 401,
//!     message: "invalid_client".to_string(),
//! };
//! assert!(error.to_string().contains("invalid_client"));
//! ```

use thiserror::Error;

/// Errors that can occur while obtaining or refreshing a bearer token.
///
/// A `status` of `0` means no HTTP response was received (network failure).
/// A 2xx `status` means the response body could not be decoded into a
/// complete token response.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The client-credentials grant was rejected or could not be completed.
    #[error("Authentication failed with status {status}: {message}")]
    AuthenticationFailed {
        /// The HTTP status code returned, or `0` for transport failures.
        status: u16,
        /// The underlying error message or response body.
        message: String,
    },

    /// No refresh token is stored; `authenticate()` must succeed first.
    #[error("No refresh token available. Call authenticate() first.")]
    MissingRefreshToken,

    /// The refresh-token grant was rejected or could not be completed.
    #[error("Token refresh failed with status {status}: {message}")]
    TokenRefreshFailed {
        /// The HTTP status code returned, or `0` for transport failures.
        status: u16,
        /// The underlying error message or response body.
        message: String,
    },
}

impl OAuthError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status, .. } | Self::TokenRefreshFailed { status, .. }
                if *status != 0 =>
            {
                Some(*status)
            }
            _ => None,
        }
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failed_includes_status_and_message() {
        let error = OAuthError::AuthenticationFailed {
            status: 401,
            message: "The client credentials are invalid".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Authentication failed"));
        assert!(message.contains("401"));
        assert!(message.contains("The client credentials are invalid"));
    }

    #[test]
    fn test_missing_refresh_token_message() {
        let message = OAuthError::MissingRefreshToken.to_string();
        assert!(message.contains("authenticate()"));
    }

    #[test]
    fn test_status_ignores_transport_failures() {
        let network = OAuthError::TokenRefreshFailed {
            status: 0,
            message: "Network error: connection refused".to_string(),
        };
        assert_eq!(network.status(), None);

        let rejected = OAuthError::TokenRefreshFailed {
            status: 400,
            message: "invalid_grant".to_string(),
        };
        assert_eq!(rejected.status(), Some(400));
        assert_eq!(OAuthError::MissingRefreshToken.status(), None);
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::MissingRefreshToken;
        let _ = error;
    }
}

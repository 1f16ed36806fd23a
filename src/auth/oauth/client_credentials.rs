//! OAuth 2.0 Client Credentials Grant for Shopware integrations.
//!
//! An integration authenticates with its own access key ID and secret; there
//! is no user context. The shop answers with a short-lived bearer token, a
//! refresh token and the bearer token's lifetime.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopware6_api::auth::oauth::exchange_client_credentials;
//!
//! let session = exchange_client_credentials(&http, &config, Utc::now()).await?;
//! println!("Token valid until {}", session.expires_at);
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::oauth::{post_token_request, OAuthError};
use crate::auth::Session;
use crate::config::ShopwareConfig;

/// Grant type for client credentials.
pub(crate) const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Request body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Exchanges the configured client credentials for a session whose expiry
/// is counted from `now`.
///
/// # Errors
///
/// Returns [`OAuthError::AuthenticationFailed`] on a transport failure, a
/// non-2xx response, or a 2xx response that is not a complete token response.
pub async fn exchange_client_credentials(
    http: &reqwest::Client,
    config: &ShopwareConfig,
    now: DateTime<Utc>,
) -> Result<Session, OAuthError> {
    let request_body = ClientCredentialsRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
    };

    post_token_request(http, config, &request_body, now)
        .await
        .map_err(|(status, message)| OAuthError::AuthenticationFailed { status, message })
}

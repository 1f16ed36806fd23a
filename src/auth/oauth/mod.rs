//! OAuth 2.0 token endpoint support.
//!
//! The shop exposes a single token endpoint, `POST /api/oauth/token`, that
//! serves two grants:
//!
//! - [`exchange_client_credentials`]: client-credentials grant, used for the
//!   first token of a session
//! - [`refresh_access_token`]: refresh-token grant, used to renew it
//!
//! Both decode an [`AccessTokenResponse`] and turn it into a
//! [`Session`] anchored at the `now` the caller passes in.
//!
//! # Error Handling
//!
//! Each grant maps every failure (transport, non-2xx, undecodable body,
//! unrepresentable expiry) to its own [`OAuthError`] variant, carrying the HTTP status (`0` if none) and
//! the underlying message.

mod client_credentials;
mod error;
mod token_refresh;

pub use client_credentials::exchange_client_credentials;
pub use error::OAuthError;
pub use token_refresh::refresh_access_token;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::{AccessTokenResponse, Session};
use crate::config::ShopwareConfig;

/// Token endpoint path relative to the shop base URL.
pub const TOKEN_ENDPOINT: &str = "api/oauth/token";

/// Posts a grant body to the token endpoint and builds a session expiring
/// `expires_in` seconds after `now`.
///
/// Failures are returned as `(status, message)` so each grant can wrap them in
/// its own error variant.
async fn post_token_request<B: Serialize + Sync>(
    http: &reqwest::Client,
    config: &ShopwareConfig,
    body: &B,
    now: DateTime<Utc>,
) -> Result<Session, (u16, String)> {
    let token_url = config.base_url().join(TOKEN_ENDPOINT);

    let response = http
        .post(&token_url)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| (0, format!("Network error: {e}")))?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::debug!(status, "Token endpoint rejected the grant");
        return Err((status, error_body));
    }

    let body_text = response
        .text()
        .await
        .map_err(|e| (status, format!("Failed to read token response: {e}")))?;

    let token: AccessTokenResponse = serde_json::from_str(&body_text)
        .map_err(|e| (status, format!("Failed to parse token response: {e}")))?;

    Session::from_token_response(&token, now).ok_or_else(|| {
        (
            status,
            format!(
                "Failed to parse token response: expires_in {} is out of range",
                token.expires_in
            ),
        )
    })
}

//! OAuth 2.0 Refresh Token Grant.
//!
//! Exchanges a previously issued refresh token for a new bearer token. The
//! shop rotates the refresh token on every exchange, so the returned refresh
//! token replaces the old one.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::oauth::{post_token_request, OAuthError};
use crate::auth::Session;
use crate::config::ShopwareConfig;

/// Grant type for refresh token requests.
pub(crate) const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    refresh_token: &'a str,
}

/// Exchanges `refresh_token` for a new session whose expiry is counted
/// from `now`.
///
/// # Errors
///
/// Returns [`OAuthError::TokenRefreshFailed`] on a transport failure, a
/// non-2xx response, or a 2xx response that is not a complete token response.
pub async fn refresh_access_token(
    http: &reqwest::Client,
    config: &ShopwareConfig,
    refresh_token: &str,
    now: DateTime<Utc>,
) -> Result<Session, OAuthError> {
    let request_body = TokenRefreshRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
        refresh_token,
    };

    post_token_request(http, config, &request_body, now)
        .await
        .map_err(|(status, message)| OAuthError::TokenRefreshFailed { status, message })
}

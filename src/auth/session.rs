//! Bearer-token session state.
//!
//! This module provides the [`Session`] snapshot held by the client and the
//! [`AccessTokenResponse`] returned by the OAuth token endpoint.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Remaining token lifetime below which the client refreshes before sending.
///
/// Covers clock skew between client and shop and requests that are still in
/// flight when the token would otherwise lapse.
pub const REFRESH_MARGIN_SECS: i64 = 30;

/// Response body of `POST /api/oauth/token`.
///
/// All three token fields are required. A 2xx response that lacks any of them
/// fails to deserialize and is reported as an authentication or refresh
/// failure, never as a half-populated session.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// The token used to obtain the next bearer token.
    pub refresh_token: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: i64,
    /// Token type reported by the shop, usually `Bearer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// An authenticated session with the shop.
///
/// A `Session` always carries both tokens; the client stores
/// `Option<Session>`, so "no session" and "complete session" are the only
/// representable states. Callers only ever see clones.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use shopware6_api::auth::{AccessTokenResponse, Session};
///
/// let now = Utc::now();
/// let response = AccessTokenResponse {
///     access_token: "A".to_string(),
///     refresh_token: "R".to_string(),
///     expires_in: 600,
///     token_type: None,
/// };
///
/// let session = Session::from_token_response(&response, now).unwrap();
/// assert_eq!(session.expires_at, now + Duration::seconds(600));
/// assert!(!session.needs_refresh(now + Duration::seconds(569)));
/// assert!(session.needs_refresh(now + Duration::seconds(570)));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The bearer token sent as `Authorization: Bearer <token>`.
    pub access_token: String,
    /// The refresh token for the `refresh_token` grant.
    pub refresh_token: String,
    /// When `access_token` expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from a token response received at `now`.
    ///
    /// Returns `None` if `now + expires_in` is not a representable time.
    #[must_use]
    pub fn from_token_response(response: &AccessTokenResponse, now: DateTime<Utc>) -> Option<Self> {
        let lifetime = Duration::try_seconds(response.expires_in)?;
        Some(Self {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires_at: now.checked_add_signed(lifetime)?,
        })
    }

    /// Returns `true` once at most [`REFRESH_MARGIN_SECS`] of lifetime
    /// remain at `now`, including when the token has already expired.
    #[must_use]
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .checked_sub_signed(Duration::seconds(REFRESH_MARGIN_SECS))
            .map_or(true, |refresh_at| now >= refresh_at)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

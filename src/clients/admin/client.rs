//! Admin API client with bearer-token lifecycle management.
//!
//! [`ShopwareClient`] owns the [`Session`] and guarantees that every request
//! leaves with a usable bearer token:
//!
//! - **Proactive**: before sending, a missing session triggers
//!   `authenticate()`, and a token within [`REFRESH_MARGIN_SECS`] of expiry
//!   triggers `refresh()`.
//! - **Reactive**: if the shop still answers `401` (e.g. the integration was
//!   revoked and re-enabled), the token is refreshed and the identical request
//!   is resent exactly once.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::auth::oauth::{exchange_client_credentials, refresh_access_token, OAuthError};
use crate::auth::{Session, REFRESH_MARGIN_SECS};
use crate::clients::admin::ApiError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::clock::{Clock, SystemClock};
use crate::config::ShopwareConfig;

/// Number of resends after a `401 Unauthorized` response.
pub const MAX_UNAUTHORIZED_RETRIES: u32 = 1;

/// Client for the Shopware 6 Admin API.
///
/// Provides the generic [`request`](Self::request) dispatcher, the `get`,
/// `post`, `patch` and `delete` shorthands, and resource helpers such as
/// [`get_products`](Self::get_products).
///
/// # Thread Safety
///
/// `ShopwareClient` is `Send + Sync`. The session sits behind an async mutex
/// that is held across each check-then-authenticate/refresh sequence, so
/// concurrent callers never authenticate twice or refresh with a stale
/// refresh token.
///
/// # Example
///
/// ```rust,ignore
/// use shopware6_api::{ShopwareClient, ShopwareConfig};
/// use serde_json::json;
///
/// let client = ShopwareClient::new(ShopwareConfig::from_env()?);
///
/// let products = client.get_products(Some(json!({"limit": 5}))).await?;
/// let created = client
///     .create_product(json!({"name": "Shirt", "productNumber": "SW-1", "stock": 10}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct ShopwareClient {
    config: ShopwareConfig,
    http_client: HttpClient,
    clock: Arc<dyn Clock>,
    session: Mutex<Option<Session>>,
}

// Verify ShopwareClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopwareClient>();
};

impl ShopwareClient {
    /// Creates a client with a default transport and the system clock.
    ///
    /// No network call is made until the first request or an explicit
    /// [`authenticate`](Self::authenticate).
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn new(config: ShopwareConfig) -> Self {
        Self::builder(config).build()
    }

    /// Creates a builder for a client with a custom transport or clock.
    #[must_use]
    pub fn builder(config: ShopwareConfig) -> ShopwareClientBuilder {
        ShopwareClientBuilder::new(config)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopwareConfig {
        &self.config
    }

    /// Returns a snapshot of the current session, if authenticated.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    /// Obtains a new token pair with the client-credentials grant.
    ///
    /// On success the session is replaced and a snapshot returned. On failure
    /// the previous session, if any, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::AuthenticationFailed`] if the grant fails.
    pub async fn authenticate(&self) -> Result<Session, OAuthError> {
        let mut guard = self.session.lock().await;
        self.authenticate_locked(&mut guard).await
    }

    /// Renews the token pair with the stored refresh token.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::MissingRefreshToken`] if no session exists yet; no
    ///   network call is made
    /// - [`OAuthError::TokenRefreshFailed`] if the grant fails; the session
    ///   is left untouched
    pub async fn refresh(&self) -> Result<Session, OAuthError> {
        let mut guard = self.session.lock().await;
        self.refresh_locked(&mut guard).await
    }

    /// Makes sure a token that is not about to expire is stored.
    ///
    /// Authenticates if there is no session, refreshes if the token expires
    /// within [`REFRESH_MARGIN_SECS`], and does nothing otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the [`OAuthError`] of the authenticate or refresh call.
    pub async fn ensure_valid(&self) -> Result<(), OAuthError> {
        self.valid_access_token().await.map(|_| ())
    }

    /// Performs one API call and returns the decoded JSON body.
    ///
    /// The token is validated first (see [`ensure_valid`](Self::ensure_valid)).
    /// A `401` response causes one refresh and one resend of the identical
    /// request; a second `401` is returned as an error. Empty bodies decode
    /// to an empty object.
    ///
    /// # Errors
    ///
    /// - [`ApiError::OAuth`] if authenticating or refreshing fails
    /// - [`ApiError::RequestFailed`] for any other failure, including a
    ///   failed resend
    pub async fn request(&self, request: HttpRequest) -> Result<Value, ApiError> {
        request
            .verify()
            .map_err(|e| ApiError::RequestFailed {
                source: e.into(),
                after_refresh: false,
            })?;

        let mut access_token = self.valid_access_token().await?;
        let mut refreshes: u32 = 0;

        loop {
            match self.http_client.send(&request, &access_token).await {
                Ok(response) => return Ok(response.body),
                Err(error) if error.is_unauthorized() && refreshes < MAX_UNAUTHORIZED_RETRIES => {
                    refreshes += 1;
                    tracing::warn!(
                        method = %request.http_method,
                        path = %request.path,
                        "Access token rejected, refreshing and resending"
                    );
                    access_token = self.refresh_rejected(&access_token).await?;
                }
                Err(source) => {
                    tracing::debug!(
                        method = %request.http_method,
                        path = %request.path,
                        error = %source,
                        "API request failed"
                    );
                    return Err(ApiError::RequestFailed {
                        source,
                        after_refresh: refreshes > 0,
                    });
                }
            }
        }
    }

    /// Sends a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, ApiError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.dispatch(builder.build()).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.dispatch(HttpRequest::builder(HttpMethod::Post, path).body(body).build())
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.dispatch(HttpRequest::builder(HttpMethod::Patch, path).body(body).build())
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch(HttpRequest::builder(HttpMethod::Delete, path).build())
            .await
    }

    async fn dispatch(
        &self,
        request: Result<HttpRequest, crate::clients::InvalidHttpRequestError>,
    ) -> Result<Value, ApiError> {
        let request = request.map_err(|e| ApiError::RequestFailed {
            source: e.into(),
            after_refresh: false,
        })?;
        self.request(request).await
    }

    /// Returns a bearer token that is not about to expire, authenticating or
    /// refreshing under the session lock if needed.
    async fn valid_access_token(&self) -> Result<String, OAuthError> {
        let mut guard = self.session.lock().await;
        let now = self.clock.now();

        let session = match guard.as_ref() {
            Some(session) if !session.needs_refresh(now) => {
                return Ok(session.access_token.clone());
            }
            Some(_) => {
                tracing::debug!(
                    margin_secs = REFRESH_MARGIN_SECS,
                    "Access token about to expire, refreshing"
                );
                self.refresh_locked(&mut guard).await?
            }
            None => self.authenticate_locked(&mut guard).await?,
        };

        Ok(session.access_token)
    }

    /// Refreshes after `rejected` got a `401`, unless a concurrent caller has
    /// already replaced it.
    async fn refresh_rejected(&self, rejected: &str) -> Result<String, OAuthError> {
        let mut guard = self.session.lock().await;

        if let Some(session) = guard.as_ref() {
            if session.access_token != rejected {
                tracing::debug!("Rejected token already replaced, reusing current session");
                return Ok(session.access_token.clone());
            }
        }

        self.refresh_locked(&mut guard).await.map(|s| s.access_token)
    }

    async fn authenticate_locked(&self, slot: &mut Option<Session>) -> Result<Session, OAuthError> {
        tracing::debug!(base_url = %self.config.base_url(), "Authenticating with client credentials");

        let session =
            exchange_client_credentials(self.http_client.transport(), &self.config, self.clock.now())
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Authentication failed");
                    e
                })?;

        tracing::debug!(expires_at = %session.expires_at, "Authenticated");
        *slot = Some(session.clone());
        Ok(session)
    }

    async fn refresh_locked(&self, slot: &mut Option<Session>) -> Result<Session, OAuthError> {
        let Some(refresh_token) = slot.as_ref().map(|s| s.refresh_token.clone()) else {
            return Err(OAuthError::MissingRefreshToken);
        };

        let session = refresh_access_token(
            self.http_client.transport(),
            &self.config,
            &refresh_token,
            self.clock.now(),
        )
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token refresh failed");
            e
        })?;

        tracing::debug!(expires_at = %session.expires_at, "Access token refreshed");
        *slot = Some(session.clone());
        Ok(session)
    }
}

/// Builder for [`ShopwareClient`] with an injected transport or clock.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopware6_api::{BaseUrl, ClientId, ClientSecret, ShopwareClient, ShopwareConfig};
///
/// let config = ShopwareConfig::builder()
///     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let transport = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// let client = ShopwareClient::builder(config).http_client(transport).build();
/// ```
#[derive(Debug)]
pub struct ShopwareClientBuilder {
    config: ShopwareConfig,
    http_client: Option<reqwest::Client>,
    clock: Option<Arc<dyn Clock>>,
}

impl ShopwareClientBuilder {
    fn new(config: ShopwareConfig) -> Self {
        Self {
            config,
            http_client: None,
            clock: None,
        }
    }

    /// Uses `client` as the HTTP transport.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Uses `clock` for token expiry decisions.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the client.
    ///
    /// # Panics
    ///
    /// Panics if no transport was injected and the default reqwest client
    /// cannot be created.
    #[must_use]
    pub fn build(self) -> ShopwareClient {
        let http_client = match self.http_client {
            Some(client) => HttpClient::with_client(&self.config, client),
            None => HttpClient::new(&self.config),
        };

        ShopwareClient {
            config: self.config,
            http_client,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            session: Mutex::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::config::{BaseUrl, ClientId, ClientSecret};
    use chrono::Duration;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, clock: &MockClock) -> ShopwareClient {
        let config = ShopwareConfig::builder()
            .base_url(BaseUrl::new(server.uri()).unwrap())
            .client_id(ClientId::new("test_client_id").unwrap())
            .client_secret(ClientSecret::new("test_client_secret").unwrap())
            .build()
            .unwrap();
        ShopwareClient::builder(config).clock(clock.clone()).build()
    }

    fn token_body(access: &str, refresh: &str) -> serde_json::Value {
        json!({"access_token": access, "refresh_token": refresh, "expires_in": 600})
    }

    async fn mount_grant(server: &MockServer, grant: &str, body: serde_json::Value, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/oauth/token"))
            .and(body_partial_json(json!({"grant_type": grant})))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_refresh_without_session_makes_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, &MockClock::new());

        assert!(matches!(
            client.refresh().await,
            Err(OAuthError::MissingRefreshToken)
        ));
        assert!(client.session().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_session() {
        let server = MockServer::start().await;
        mount_grant(&server, "client_credentials", token_body("A", "R"), 1).await;
        Mock::given(method("POST"))
            .and(path("/api/oauth/token"))
            .and(body_partial_json(json!({"grant_type": "refresh_token"})))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, &MockClock::new());
        let before = client.authenticate().await.unwrap();

        let result = client.refresh().await;

        assert!(matches!(
            result,
            Err(OAuthError::TokenRefreshFailed { status: 500, .. })
        ));
        assert_eq!(client.session().await, Some(before));
    }

    #[tokio::test]
    async fn test_ensure_valid_is_noop_for_fresh_token() {
        let server = MockServer::start().await;
        mount_grant(&server, "client_credentials", token_body("A", "R"), 1).await;
        mount_grant(&server, "refresh_token", token_body("B", "R2"), 0).await;

        let clock = MockClock::new();
        let client = client_for(&server, &clock);
        client.authenticate().await.unwrap();

        clock.advance(Duration::seconds(569));
        client.ensure_valid().await.unwrap();

        assert_eq!(client.session().await.unwrap().access_token, "A");
    }

    #[tokio::test]
    async fn test_ensure_valid_refreshes_inside_margin() {
        let server = MockServer::start().await;
        mount_grant(&server, "client_credentials", token_body("A", "R"), 1).await;
        mount_grant(&server, "refresh_token", token_body("B", "R2"), 1).await;

        let clock = MockClock::new();
        let client = client_for(&server, &clock);
        client.authenticate().await.unwrap();

        clock.advance(Duration::seconds(571));
        client.ensure_valid().await.unwrap();

        let session = client.session().await.unwrap();
        assert_eq!(session.access_token, "B");
        assert_eq!(session.refresh_token, "R2");
        assert_eq!(session.expires_at, clock.now() + Duration::seconds(600));
    }

    #[tokio::test]
    async fn test_ensure_valid_authenticates_without_session() {
        let server = MockServer::start().await;
        mount_grant(&server, "client_credentials", token_body("A", "R"), 1).await;

        let client = client_for(&server, &MockClock::new());
        client.ensure_valid().await.unwrap();

        assert_eq!(client.session().await.unwrap().access_token, "A");
    }

    #[tokio::test]
    async fn test_concurrent_requests_authenticate_once() {
        let server = MockServer::start().await;
        mount_grant(&server, "client_credentials", token_body("A", "R"), 1).await;
        Mock::given(method("GET"))
            .and(path("/api/product"))
            .and(header("authorization", "Bearer A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
            .expect(4)
            .mount(&server)
            .await;

        let client = client_for(&server, &MockClock::new());

        let (a, b, c, d) = tokio::join!(
            client.get("/api/product", None),
            client.get("/api/product", None),
            client.get("/api/product", None),
            client.get("/api/product", None),
        );

        for result in [a, b, c, d] {
            assert_eq!(result.unwrap(), json!({"total": 0}));
        }
    }

    #[tokio::test]
    async fn test_out_of_range_expires_in_is_authentication_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A",
                "refresh_token": "R",
                "expires_in": 9_000_000_000_000_000_i64
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, &MockClock::new());

        match client.authenticate().await {
            Err(OAuthError::AuthenticationFailed { status, message }) => {
                assert_eq!(status, 200);
                assert!(message.contains("Failed to parse token response"));
            }
            other => panic!("Expected AuthenticationFailed, got: {other:?}"),
        }
        assert!(client.session().await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_query_fails_before_any_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, &MockClock::new());
        let result = client.get("/api/product", Some(json!("limit=5"))).await;

        assert!(matches!(
            result,
            Err(ApiError::RequestFailed {
                source: crate::clients::HttpError::InvalidRequest(_),
                after_refresh: false
            })
        ));
    }
}

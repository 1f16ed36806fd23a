//! HTTP transport for Shopware 6 API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] plus a bearer token into one HTTP round trip. It does not
//! know about token lifetimes; that is the job of
//! [`ShopwareClient`](crate::ShopwareClient).

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::query::encode_query;
use crate::config::{BaseUrl, ShopwareConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Accept`, `Content-Type`, `User-Agent`, `Authorization`)
/// - Case-insensitive merging of caller-supplied headers, applied last
/// - Query encoding and JSON body serialization
/// - JSON decoding of response bodies
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The underlying reqwest client.
    client: reqwest::Client,
    /// Base URL of the shop, without trailing slash.
    base_url: BaseUrl,
    /// Default headers sent with every request.
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShopwareConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(config, client)
    }

    /// Creates a new HTTP client on top of an existing reqwest client.
    ///
    /// Use this to share a connection pool or to configure timeouts and
    /// proxies on the transport.
    #[must_use]
    pub fn with_client(config: &ShopwareConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopware6 API Rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&user_agent) {
            default_headers.insert(USER_AGENT, value);
        }

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Returns the underlying reqwest client.
    #[must_use]
    pub const fn transport(&self) -> &reqwest::Client {
        &self.client
    }

    /// Builds the full header set for one request.
    ///
    /// Order of precedence, lowest first: defaults, `Authorization`, the
    /// request's extra headers. Names are compared case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidHeader`] if a header name or
    /// value cannot be encoded, including a bearer token with control characters.
    pub fn build_headers(
        &self,
        request: &HttpRequest,
        access_token: &str,
    ) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = self.default_headers.clone();

        let bearer = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
            InvalidHttpRequestError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, bearer);

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                headers.insert(name, value);
            }
        }

        Ok(headers)
    }

    /// Sends a request authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`InvalidBody`)
    pub async fn send(
        &self,
        request: &HttpRequest,
        access_token: &str,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let headers = self.build_headers(request, access_token)?;

        let mut req_builder = self
            .client
            .request(request.http_method.into(), &url)
            .headers(headers);

        if let Some(query) = request.query_object() {
            let pairs = encode_query(query);
            if !pairs.is_empty() {
                req_builder = req_builder.query(&pairs);
            }
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(method = %request.http_method, path = %request.path, status = code, "Received API response");

        if !(200..300).contains(&code) {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(|e| HttpError::InvalidBody {
                code,
                message: e.to_string(),
            })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

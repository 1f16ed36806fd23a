//! # Shopware 6 API Rust Client
//!
//! An async client for the Shopware 6 Admin API. It authenticates as an
//! integration with the OAuth 2.0 client-credentials grant, keeps the bearer
//! token fresh, and forwards CRUD calls to resource endpoints, returning the
//! decoded JSON bodies.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ShopwareConfig`] and [`ShopwareConfigBuilder`]
//! - Validated newtypes for the base URL and integration credentials
//! - Client-credentials and refresh-token grants via [`auth::oauth`]
//! - Proactive refresh shortly before expiry, reactive refresh on `401`
//! - Generic `get`/`post`/`patch`/`delete` plus product, order and customer helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopware6_api::{BaseUrl, ClientId, ClientSecret, ShopwareClient, ShopwareConfig};
//! use serde_json::json;
//!
//! let config = ShopwareConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
//!     .client_id(ClientId::new("SWIA...").unwrap())
//!     .client_secret(ClientSecret::new("...").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ShopwareClient::new(config);
//!
//! // The first call authenticates automatically.
//! let products = client.get_products(Some(json!({"limit": 5}))).await?;
//!
//! // Generic access to any endpoint.
//! let taxes = client.get("/api/tax", Some(json!({"limit": 1}))).await?;
//! ```
//!
//! ## Token Lifecycle
//!
//! The client stores at most one [`Session`]. Before every request it
//! authenticates if there is none and refreshes if the token expires within
//! [`REFRESH_MARGIN_SECS`](auth::REFRESH_MARGIN_SECS). If the shop still
//! rejects the token with `401`, the client refreshes once and resends the
//! identical request once.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and session live in the client instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client is `Send + Sync`; the session is mutex-guarded
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Schema-agnostic bodies**: Requests and responses are `serde_json::Value`

pub mod auth;
pub mod clients;
pub mod clock;
pub mod config;
pub mod error;
pub mod resources;

pub use auth::oauth::OAuthError;
pub use auth::{AccessTokenResponse, Session};
pub use config::{BaseUrl, ClientId, ClientSecret, ShopwareConfig, ShopwareConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, ShopwareClient, ShopwareClientBuilder,
};

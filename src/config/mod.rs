//! Configuration types for the Shopware 6 API client.
//!
//! This module provides the configuration types used to point a client at a
//! shop and authenticate it as an integration.
//!
//! # Overview
//!
//! - [`ShopwareConfig`]: The immutable configuration struct
//! - [`ShopwareConfigBuilder`]: A builder for constructing [`ShopwareConfig`] instances
//! - [`BaseUrl`]: A validated shop URL with trailing slashes stripped
//! - [`ClientId`]: A validated integration client ID
//! - [`ClientSecret`]: A validated client secret with masked debug output
//!
//! # Example
//!
//! ```rust
//! use shopware6_api::{BaseUrl, ClientId, ClientSecret, ShopwareConfig};
//!
//! let config = ShopwareConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com/").unwrap())
//!     .client_id(ClientId::new("SWIAXYZ").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://shop.example.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Environment variable holding the shop URL.
pub const ENV_URL: &str = "SHOPWARE_URL";
/// Environment variable holding the integration client ID.
pub const ENV_CLIENT_ID: &str = "SHOPWARE_CLIENT_ID";
/// Environment variable holding the integration client secret.
pub const ENV_CLIENT_SECRET: &str = "SHOPWARE_CLIENT_SECRET";

/// Configuration for a [`ShopwareClient`](crate::ShopwareClient).
///
/// Holds the shop URL and the integration credentials. The configuration is
/// immutable once built.
///
/// # Thread Safety
///
/// `ShopwareConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopwareConfig {
    base_url: BaseUrl,
    client_id: ClientId,
    client_secret: ClientSecret,
    user_agent_prefix: Option<String>,
}

impl ShopwareConfig {
    /// Creates a new builder for constructing a `ShopwareConfig`.
    #[must_use]
    pub fn builder() -> ShopwareConfigBuilder {
        ShopwareConfigBuilder::new()
    }

    /// Builds a configuration from the `SHOPWARE_URL`, `SHOPWARE_CLIENT_ID`
    /// and `SHOPWARE_CLIENT_SECRET` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a variable is unset, or the
    /// corresponding validation error if a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str| lookup(name).ok_or(ConfigError::MissingEnvVar { name });

        Self::builder()
            .base_url(BaseUrl::new(var(ENV_URL)?)?)
            .client_id(ClientId::new(var(ENV_CLIENT_ID)?)?)
            .client_secret(ClientSecret::new(var(ENV_CLIENT_SECRET)?)?)
            .build()
    }

    /// Returns the shop base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopwareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopwareConfig>();
};

/// Builder for constructing [`ShopwareConfig`] instances.
///
/// Required fields are `base_url`, `client_id` and `client_secret`.
#[derive(Debug, Default)]
pub struct ShopwareConfigBuilder {
    base_url: Option<BaseUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    user_agent_prefix: Option<String>,
}

impl ShopwareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopwareConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url`,
    /// `client_id` or `client_secret` is not set.
    pub fn build(self) -> Result<ShopwareConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        Ok(ShopwareConfig {
            base_url,
            client_id,
            client_secret,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! Authentication types for the Shopware 6 API client.
//!
//! # Overview
//!
//! - [`Session`]: Bearer/refresh token pair with its expiry time
//! - [`AccessTokenResponse`]: Typed body of the token endpoint response
//! - [`oauth`]: Client-credentials and refresh-token grants
//!
//! Sessions are owned by [`ShopwareClient`](crate::ShopwareClient); they are
//! created from token responses and only handed out as snapshots.

pub mod oauth;
pub mod session;

pub use session::{AccessTokenResponse, Session, REFRESH_MARGIN_SECS};

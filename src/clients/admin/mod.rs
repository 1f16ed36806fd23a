//! Admin API client.
//!
//! - [`ShopwareClient`]: Token-managing request dispatcher and resource helpers
//! - [`ShopwareClientBuilder`]: Injects a custom transport or clock
//! - [`ApiError`]: Errors returned by API calls

mod client;
mod errors;

pub use client::{ShopwareClient, ShopwareClientBuilder, MAX_UNAUTHORIZED_RETRIES};
pub use errors::ApiError;

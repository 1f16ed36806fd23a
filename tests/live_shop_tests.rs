//! Tests against a real Shopware 6 shop.
//!
//! Ignored by default. To run them, create an integration in the shop
//! administration and export its credentials:
//!
//! ```text
//! SHOPWARE_URL=https://shop.example.com \
//! SHOPWARE_CLIENT_ID=SWIA... \
//! SHOPWARE_CLIENT_SECRET=... \
//! cargo test --test live_shop_tests -- --ignored
//! ```

use serde_json::json;
use shopware6_api::{ShopwareClient, ShopwareConfig};

fn live_client() -> ShopwareClient {
    let config = ShopwareConfig::from_env()
        .expect("SHOPWARE_URL, SHOPWARE_CLIENT_ID and SHOPWARE_CLIENT_SECRET must be set");
    ShopwareClient::new(config)
}

#[tokio::test]
#[ignore = "requires a live shop"]
async fn test_live_authentication() {
    let client = live_client();

    let session = client.authenticate().await.unwrap();

    assert!(!session.access_token.is_empty());
    assert!(!session.refresh_token.is_empty());
}

#[tokio::test]
#[ignore = "requires a live shop"]
async fn test_live_get_products() {
    let client = live_client();

    let products = client.get_products(Some(json!({"limit": 5}))).await.unwrap();

    assert!(products.get("data").is_some());
}

#[tokio::test]
#[ignore = "requires a live shop"]
async fn test_live_refresh() {
    let client = live_client();
    let first = client.authenticate().await.unwrap();

    let second = client.refresh().await.unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert!(second.expires_at >= first.expires_at);
}

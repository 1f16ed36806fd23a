//! Integration tests for the product, order and customer helpers.

use serde_json::{json, Value};
use shopware6_api::resources::{CUSTOMER_PATH, ORDER_PATH, PRODUCT_PATH};
use shopware6_api::{BaseUrl, ClientId, ClientSecret, ShopwareClient, ShopwareConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock shop whose token endpoint always hands out `token`.
async fn start_shop() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 600,
            "access_token": "token",
            "refresh_token": "refresh"
        })))
        .mount(&server)
        .await;
    server
}

fn create_client(server: &MockServer) -> ShopwareClient {
    let config = ShopwareConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .client_id(ClientId::new("SWIATEST").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .build()
        .unwrap();
    ShopwareClient::new(config)
}

fn search_result(entity: &str) -> Value {
    json!({"total": 1, "data": [{"id": "abc", "apiAlias": entity}]})
}

#[test]
fn test_resource_paths() {
    assert_eq!(PRODUCT_PATH, "/api/product");
    assert_eq!(ORDER_PATH, "/api/order");
    assert_eq!(CUSTOMER_PATH, "/api/customer");
}

#[tokio::test]
async fn test_get_products_wraps_criteria() {
    let server = start_shop().await;
    Mock::given(method("GET"))
        .and(path("/api/product"))
        .and(query_param("criteria[limit]", "5"))
        .and(query_param("criteria[filter][0][field]", "active"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result("product")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let criteria = json!({
        "limit": 5,
        "filter": [{"type": "equals", "field": "active", "value": true}]
    });

    assert_eq!(
        client.get_products(Some(criteria)).await.unwrap(),
        search_result("product")
    );
}

#[tokio::test]
async fn test_get_products_without_criteria() {
    let server = start_shop().await;
    Mock::given(method("GET"))
        .and(path("/api/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result("product")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert_eq!(
        client.get_products(None).await.unwrap(),
        search_result("product")
    );
}

#[tokio::test]
async fn test_product_crud_helpers() {
    let server = start_shop().await;
    let product = json!({"name": "Shirt", "productNumber": "SW-1", "stock": 10});
    Mock::given(method("GET"))
        .and(path("/api/product/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "abc"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/product"))
        .and(body_json(product.clone()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/product/abc"))
        .and(body_json(json!({"stock": 5})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/product/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert_eq!(
        client.get_product("abc").await.unwrap(),
        json!({"data": {"id": "abc"}})
    );
    assert_eq!(client.create_product(product).await.unwrap(), json!({}));
    assert_eq!(
        client
            .update_product("abc", json!({"stock": 5}))
            .await
            .unwrap(),
        json!({})
    );
    assert_eq!(client.delete_product("abc").await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_order_helpers() {
    let server = start_shop().await;
    Mock::given(method("GET"))
        .and(path("/api/order"))
        .and(query_param("criteria[page]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result("order")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/order/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "abc"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert_eq!(
        client.get_orders(Some(json!({"page": 2}))).await.unwrap(),
        search_result("order")
    );
    assert_eq!(
        client.get_order("abc").await.unwrap(),
        json!({"data": {"id": "abc"}})
    );
}

#[tokio::test]
async fn test_get_customers() {
    let server = start_shop().await;
    Mock::given(method("GET"))
        .and(path("/api/customer"))
        .and(query_param("criteria[limit]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result("customer")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert_eq!(
        client.get_customers(Some(json!({"limit": 1}))).await.unwrap(),
        search_result("customer")
    );
}

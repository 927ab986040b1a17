use reqwest::StatusCode;
use serde_json::json;

use catalog_infra::ProductBackend;

const GATEWAY_KEY: &str = "test-gateway";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod over the in-memory backend, on an ephemeral port.
        let app = catalog_api::app::build_app(ProductBackend::in_memory(), GATEWAY_KEY.to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn admin(&self, client: &reqwest::Client, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Api-Gateway", GATEWAY_KEY)
            .header("X-Forwarded-Roles", "Admin")
    }

    fn anonymous(&self, client: &reqwest::Client, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Api-Gateway", GATEWAY_KEY)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn product_body(name: &str) -> serde_json::Value {
    json!({ "name": name, "quantity": 10, "price": 100.70 })
}

#[tokio::test]
async fn requests_not_from_the_gateway_are_unavailable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.text().await.unwrap(), "Service is unavailable");
}

#[tokio::test]
async fn health_does_not_require_the_gateway() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_catalog_reports_404_with_message() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv
        .anonymous(&client, reqwest::Method::GET, "/products")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "No products detected in the database");
}

#[tokio::test]
async fn create_then_list_then_get_by_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv
        .admin(&client, reqwest::Method::POST, "/products")
        .json(&product_body("Product 1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let outcome: serde_json::Value = res.json().await.unwrap();
    assert_eq!(outcome["flag"], json!(true));
    assert_eq!(
        outcome["message"],
        json!("Product 1 added to database successfully")
    );

    let res = srv
        .anonymous(&client, reqwest::Method::GET, "/products")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let list: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(list.len(), 1);
    let id = list[0]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(list[0]["name"], json!("Product 1"));
    assert_eq!(list[0]["quantity"], json!(10));

    let res = srv
        .anonymous(&client, reqwest::Method::GET, &format!("/products/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: serde_json::Value = res.json().await.unwrap();
    assert_eq!(item["id"].as_i64().unwrap(), id);
    assert_eq!(item["name"], json!("Product 1"));
}

#[tokio::test]
async fn duplicate_create_is_rejected_with_400() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    srv.admin(&client, reqwest::Method::POST, "/products")
        .json(&product_body("Product 1"))
        .send()
        .await
        .unwrap();

    let res = srv
        .admin(&client, reqwest::Method::POST, "/products")
        .json(&product_body("Product 1"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let outcome: serde_json::Value = res.json().await.unwrap();
    assert_eq!(outcome["flag"], json!(false));
    assert_eq!(outcome["message"], json!("Product 1 already added"));
}

#[tokio::test]
async fn get_unknown_id_is_404_with_id_in_message() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv
        .anonymous(&client, reqwest::Method::GET, "/products/999")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "No product found with id: 999");
}

#[tokio::test]
async fn update_replaces_the_stored_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    srv.admin(&client, reqwest::Method::POST, "/products")
        .json(&product_body("Product 1"))
        .send()
        .await
        .unwrap();

    let res = srv
        .admin(&client, reqwest::Method::PUT, "/products")
        .json(&json!({ "id": 1, "name": "Product 1", "quantity": 42, "price": 99.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let outcome: serde_json::Value = res.json().await.unwrap();
    assert_eq!(outcome["message"], json!("Product 1 is updated successfully"));

    let res = srv
        .anonymous(&client, reqwest::Method::GET, "/products/1")
        .send()
        .await
        .unwrap();
    let item: serde_json::Value = res.json().await.unwrap();
    assert_eq!(item["quantity"], json!(42));
}

#[tokio::test]
async fn update_with_unknown_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv
        .admin(&client, reqwest::Method::PUT, "/products")
        .json(&json!({ "id": 999, "name": "Phantom", "quantity": 1, "price": 1.00 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let outcome: serde_json::Value = res.json().await.unwrap();
    assert_eq!(outcome["flag"], json!(false));
    assert_eq!(outcome["message"], json!("Phantom not found"));
}

#[tokio::test]
async fn delete_removes_exactly_one_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["Product 1", "Product 2"] {
        srv.admin(&client, reqwest::Method::POST, "/products")
            .json(&product_body(name))
            .send()
            .await
            .unwrap();
    }

    let res = srv
        .admin(&client, reqwest::Method::DELETE, "/products")
        .json(&json!({ "id": 1, "name": "Product 1", "quantity": 10, "price": 100.70 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let outcome: serde_json::Value = res.json().await.unwrap();
    assert_eq!(outcome["message"], json!("Product 1 deleted successfully"));

    let res = srv
        .anonymous(&client, reqwest::Method::GET, "/products")
        .send()
        .await
        .unwrap();
    let list: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], json!("Product 2"));
}

#[tokio::test]
async fn mutations_require_the_admin_role() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = srv
        .anonymous(&client, reqwest::Method::POST, "/products")
        .json(&product_body("Product 1"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

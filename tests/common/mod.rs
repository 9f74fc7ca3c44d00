use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use market_next_door_api::{
    app,
    config::AppConfig,
    db::{self, DbConfig},
    AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness for spinning up the full router backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_cfg = DbConfig::in_memory_sqlite();
        let mut cfg = AppConfig::new(
            db_cfg.url.clone(),
            "127.0.0.1".to_string(),
            18_080,
            "development".to_string(),
        );
        cfg.db_max_connections = db_cfg.max_connections;
        cfg.db_min_connections = db_cfg.min_connections;

        let pool = db::establish_connection_with_config(&db_cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = app(state.clone());

        Self { router, state }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let body = body.map(|json| {
            serde_json::to_string(&json).expect("failed to serialize json request body")
        });
        self.request_raw(method, uri, body).await
    }

    /// Send a request whose body is passed through untouched.
    pub async fn request_raw(&self, method: Method, uri: &str, body: Option<String>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(raw) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(raw)
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a request and decode the JSON response (`Value::Null` for empty bodies).
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        read_json(response).await
    }

    #[allow(dead_code)]
    pub async fn create_vendor(&self, name: &str) -> Value {
        let (status, body) = self
            .call(Method::POST, "/api/v1/vendors", Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED, "vendor seed failed: {body}");
        body
    }

    #[allow(dead_code)]
    pub async fn create_item(&self, vendor_id: i64, name: &str, price: &str) -> Value {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/v1/items",
                Some(json!({ "vendor": vendor_id, "name": name, "price": price })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "item seed failed: {body}");
        body
    }

    #[allow(dead_code)]
    pub async fn create_customer(&self, first_name: &str) -> Value {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/v1/customers",
                Some(json!({
                    "first_name": first_name,
                    "last_name": "Doe",
                    "email": format!("{}@example.com", first_name.to_lowercase()),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "customer seed failed: {body}");
        body
    }
}

/// Reads the status and JSON body of a response; empty bodies decode to `Value::Null`.
pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let value = serde_json::from_slice(&bytes).expect("response body is not json");
    (status, value)
}

/// Field names present in a 400 field-error map
#[allow(dead_code)]
pub fn error_fields(body: &Value) -> Vec<String> {
    body.as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

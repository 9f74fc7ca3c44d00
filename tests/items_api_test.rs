mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_formats_price_and_defaults_quantity() {
    let app = TestApp::new().await;
    let vendor = app.create_vendor("Acme").await;

    let (status, item) = app
        .call(
            Method::POST,
            "/api/v1/items",
            Some(json!({"vendor": vendor["id"], "name": "Apple", "price": "1"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["vendor"], vendor["id"]);
    assert_eq!(item["price"], "1.00");
    assert_eq!(item["quantity"], 0);
    assert_eq!(item["description"], serde_json::Value::Null);
}

#[tokio::test]
async fn numeric_prices_are_accepted() {
    let app = TestApp::new().await;
    let vendor = app.create_vendor("Acme").await;

    let (status, item) = app
        .call(
            Method::POST,
            "/api/v1/items",
            Some(json!({"vendor": vendor["id"], "name": "Pear", "price": 2.5, "quantity": 12})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["price"], "2.50");
    assert_eq!(item["quantity"], 12);
}

#[tokio::test]
async fn unknown_vendor_is_a_field_error() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/items",
            Some(json!({"vendor": 99, "name": "Apple", "price": "1.00"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"vendor": ["Invalid pk \"99\" - object does not exist."]})
    );

    let (_, items) = app.call(Method::GET, "/api/v1/items", None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn rejects_bad_prices_and_quantities() {
    let app = TestApp::new().await;
    let vendor = app.create_vendor("Acme").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/items",
            Some(json!({"vendor": vendor["id"], "name": "Apple", "price": "1.005", "quantity": -1})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["price"],
        json!(["Ensure that there are no more than 2 decimal places."])
    );
    assert_eq!(
        body["quantity"],
        json!(["Ensure this value is greater than or equal to 0."])
    );

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/items",
            Some(json!({"vendor": "abc", "name": "Apple", "price": "free"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["vendor"], json!(["A valid integer is required."]));
    assert_eq!(body["price"], json!(["A valid number is required."]));
}

#[tokio::test]
async fn replace_can_move_item_between_vendors() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let globex = app.create_vendor("Globex").await;
    let item = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;
    let uri = format!("/api/v1/items/{}", item["id"]);

    let (status, moved) = app
        .call(
            Method::PUT,
            &uri,
            Some(json!({"vendor": globex["id"], "name": "Apple", "price": "1.25", "quantity": 3})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["vendor"], globex["id"]);
    assert_eq!(moved["price"], "1.25");

    let (status, _) = app
        .call(
            Method::GET,
            &format!("/api/v1/vendors/{}/items/{}", acme["id"], item["id"]),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replace_with_unknown_vendor_keeps_record() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let item = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;
    let uri = format!("/api/v1/items/{}", item["id"]);

    let (status, body) = app
        .call(
            Method::PUT,
            &uri,
            Some(json!({"vendor": 42, "name": "Apple", "price": "1.00"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["vendor"].is_array());

    let (_, fetched) = app.call(Method::GET, &uri, None).await;
    assert_eq!(fetched, item);
}

#[tokio::test]
async fn delete_item() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let item = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;
    let uri = format!("/api/v1/items/{}", item["id"]);

    let (status, _) = app.call(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.call(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, vendor) = app
        .call(Method::GET, &format!("/api/v1/vendors/{}", acme["id"]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vendor, acme);
}

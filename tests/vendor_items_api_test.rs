mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn vendor_scoped_lifecycle() {
    let app = TestApp::new().await;

    let (status, vendor) = app
        .call(Method::POST, "/api/v1/vendors", Some(json!({"name": "Acme"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let vendor_id = vendor["id"].as_i64().unwrap();

    let (status, item) = app
        .call(
            Method::POST,
            &format!("/api/v1/vendors/{vendor_id}/items"),
            Some(json!({"name": "Apple", "price": "1.00"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["vendor"], vendor_id);
    assert_eq!(item["price"], "1.00");
    assert_eq!(item["quantity"], 0);
    let item_id = item["id"].as_i64().unwrap();

    let (status, listed) = app
        .call(Method::GET, &format!("/api/v1/vendors/{vendor_id}/items"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([item]));

    let (status, _) = app
        .call(Method::DELETE, &format!("/api/v1/vendors/{vendor_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .call(
            Method::GET,
            &format!("/api/v1/vendors/{vendor_id}/items/{item_id}"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn list_only_shows_the_vendors_own_items() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let globex = app.create_vendor("Globex").await;
    let apple = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;
    app.create_item(globex["id"].as_i64().unwrap(), "Gear", "4.00")
        .await;

    let (status, listed) = app
        .call(Method::GET, &format!("/api/v1/vendors/{}/items", acme["id"]), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([apple]));
}

#[tokio::test]
async fn vendor_without_items_lists_empty() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;

    let (status, listed) = app
        .call(Method::GET, &format!("/api/v1/vendors/{}/items", acme["id"]), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn another_vendors_item_is_not_found() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let globex = app.create_vendor("Globex").await;
    let gear = app
        .create_item(globex["id"].as_i64().unwrap(), "Gear", "4.00")
        .await;
    let scoped = format!("/api/v1/vendors/{}/items/{}", acme["id"], gear["id"]);

    let (status, _) = app.call(Method::GET, &scoped, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .call(
            Method::PUT,
            &scoped,
            Some(json!({"name": "Stolen", "price": "0.00"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::DELETE, &scoped, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, fetched) = app
        .call(Method::GET, &format!("/api/v1/items/{}", gear["id"]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, gear);
}

#[tokio::test]
async fn path_vendor_overrides_body_vendor() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let globex = app.create_vendor("Globex").await;

    let (status, item) = app
        .call(
            Method::POST,
            &format!("/api/v1/vendors/{}/items", acme["id"]),
            Some(json!({"vendor": globex["id"], "name": "Apple", "price": "1.00"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["vendor"], acme["id"]);

    let (status, updated) = app
        .call(
            Method::PUT,
            &format!("/api/v1/vendors/{}/items/{}", acme["id"], item["id"]),
            Some(json!({"vendor": globex["id"], "name": "Green apple", "price": "1.10"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["vendor"], acme["id"]);
    assert_eq!(updated["name"], "Green apple");
}

#[tokio::test]
async fn scoped_create_reports_field_errors() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/v1/vendors/{}/items", acme["id"]),
            Some(json!({"name": ""})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "name": ["This field may not be blank."],
            "price": ["This field is required."]
        })
    );
}

#[tokio::test]
async fn invalid_scoped_replace_returns_field_map_and_keeps_item() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let apple = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;
    let uri = format!("/api/v1/vendors/{}/items/{}", acme["id"], apple["id"]);

    let (status, body) = app
        .call(Method::PUT, &uri, Some(json!({"name": "", "price": "x"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "name": ["This field may not be blank."],
            "price": ["A valid number is required."]
        })
    );

    let (status, fetched) = app.call(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, apple);
}

#[tokio::test]
async fn unknown_vendor_is_not_found_even_with_invalid_body() {
    let app = TestApp::new().await;

    let (status, _) = app.call(Method::GET, "/api/v1/vendors/7/items", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .call(Method::POST, "/api/v1/vendors/7/items", Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn scoped_delete_removes_item() {
    let app = TestApp::new().await;
    let acme = app.create_vendor("Acme").await;
    let apple = app
        .create_item(acme["id"].as_i64().unwrap(), "Apple", "1.00")
        .await;

    let (status, _) = app
        .call(
            Method::DELETE,
            &format!("/api/v1/vendors/{}/items/{}", acme["id"], apple["id"]),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .call(Method::GET, &format!("/api/v1/items/{}", apple["id"]), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

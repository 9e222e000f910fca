// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Request contract tests for the generated Menu API client.
//!
//! Each test mounts a mock that only matches the exact method, path, query
//! string and body an operation must produce, and expects it to be hit once.

use menu_client::{MenuClient, error_message, error_status, types};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item(name: &str, price: f64) -> types::Item {
    types::Item {
        name: name.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_get_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    assert_eq!(client.get_answer().await.unwrap(), 42);
}

/// The generated builder and `ResponseValue` are usable from the crate root
#[tokio::test]
async fn test_generated_builder_from_crate_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = menu_client::Client::new(&server.uri());
    let response: menu_client::ResponseValue<i64> = client.get_answer().send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.into_inner(), 42);
}

#[tokio::test]
async fn test_post_hello() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("Hello, world!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    assert_eq!(client.post_hello().await.unwrap(), "Hello, world!");
}

#[tokio::test]
async fn test_put_items_sends_json_body_without_path_params() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/items"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"Name": "newItem", "Price": 33.3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("created item newItem")))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let result = client.put_items(item("newItem", 33.3)).await.unwrap();
    assert_eq!(result, "created item newItem");
}

#[tokio::test]
async fn test_post_items_by_menu_id_substitutes_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items/1"))
        .and(body_json(json!({"Name": "updatedItem", "Price": 22.2})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Name": "updatedItem", "Price": 22.2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let created = client
        .post_items_by_menu_id(1, item("updatedItem", 22.2))
        .await
        .unwrap();
    assert_eq!(created.name, "updatedItem");
    assert_eq!(created.price, 22.2);
}

#[tokio::test]
async fn test_get_menus_decodes_menu() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": 1,
            "Items": [
                {"Name": "Steak", "Price": 13.95},
                {"Name": "Potatoes", "Price": 3.95}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let menu = client.get_menus().await.unwrap();
    assert_eq!(menu.id, 1);
    let items = menu.items.expect("items present");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Steak");
}

#[tokio::test]
async fn test_get_menus_accepts_null_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": 7, "Items": null})))
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let menu = client.get_menus().await.unwrap();
    assert_eq!(menu.id, 7);
    assert!(menu.items.is_none());
}

#[tokio::test]
async fn test_delete_menus_by_id_sends_quiet_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/menus/2"))
        .and(query_param("Quiet", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("deleted menu 2")))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let result = client.delete_menus_by_id(2, false).await.unwrap();
    assert_eq!(result, "deleted menu 2");
}

#[tokio::test]
async fn test_get_menu_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menus/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ID": 2, "Items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let menu = client.get_menu_by_id(2).await.unwrap();
    assert_eq!(menu.id, 2);
    assert_eq!(menu.items.map(|items| items.len()), Some(0));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&format!("{}/api", server.uri()));
    assert_eq!(client.get_answer().await.unwrap(), 42);
}

#[tokio::test]
async fn test_client_error_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/menus/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "Not Found",
            "message": "menu 9 not found",
            "request_id": "req-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let err = client.delete_menus_by_id(9, true).await.unwrap_err();
    assert_eq!(error_status(&err), Some(404));
    assert_eq!(error_message(&err), "menu 9 not found");
}

#[tokio::test]
async fn test_server_error_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal Server Error",
            "request_id": "req-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    let err = client.get_answer().await.unwrap_err();
    assert_eq!(error_status(&err), Some(500));
}

#[tokio::test]
async fn test_undecodable_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = MenuClient::new(&server.uri());
    assert!(client.get_answer().await.is_err());
}

#[tokio::test]
async fn test_transport_failure_is_rejected() {
    // Reserve a port, then close it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MenuClient::new(&format!("http://{}", addr));
    let err = client.post_hello().await.unwrap_err();
    assert!(error_status(&err).is_none());
}

//! Static frontend serving and the unknown-endpoint fallback.

use std::fs;

use phonebook::config::PhonebookConfig;
use phonebook::store::PersonStore;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

fn config_with_assets(dir: &std::path::Path) -> PhonebookConfig {
    let mut config = PhonebookConfig::default();
    config.assets.dir = dir.to_path_buf();
    config
}

#[tokio::test]
async fn test_serves_asset_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/app.js"), "console.log('phonebook')").unwrap();

    let server = common::start_server(config_with_assets(dir.path()), PersonStore::new()).await;

    let res = common::client()
        .get(server.url("/assets/app.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "console.log('phonebook')");

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "<div id=\"root\"></div>");

    server.stop().await;
}

#[tokio::test]
async fn test_client_routes_get_index_page() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();

    let server = common::start_server(config_with_assets(dir.path()), PersonStore::new()).await;

    let res = common::client()
        .get(server.url("/contacts/42"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "<div id=\"root\"></div>");

    server.stop().await;
}

#[tokio::test]
async fn test_api_paths_never_fall_back_to_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();

    let server = common::start_server(config_with_assets(dir.path()), PersonStore::new()).await;

    let res = common::client()
        .get(server.url("/api/contacts"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "unknown endpoint" }));

    server.stop().await;
}

#[tokio::test]
async fn test_missing_index_is_unknown_endpoint() {
    let dir = tempfile::tempdir().unwrap();

    let server = common::start_server(config_with_assets(dir.path()), PersonStore::new()).await;

    let res = common::client()
        .get(server.url("/anything"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "unknown endpoint" }));

    let res = common::client()
        .post(server.url("/anything"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_form_body_success() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com/a")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "https://example.com/a",
        "short_url": 1
    }));
}

#[tokio::test]
async fn test_shorten_json_body_success() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "http://example.org/path?q=1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "http://example.org/path?q=1");
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let server = common::api_server(common::create_test_state());

    let first = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com/a")])
        .await
        .json::<serde_json::Value>();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_shorten_scenario_assigns_sequential_codes() {
    let server = common::api_server(common::create_test_state());

    let mut codes = Vec::new();
    for url in [
        "https://example.com/a",
        "https://example.com/b",
        "https://example.com/a",
    ] {
        let json = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await
            .json::<serde_json::Value>();
        codes.push(json["short_url"].as_i64().unwrap());
    }
    assert_eq!(codes, vec![1, 2, 1]);

    let response = server.get("/api/shorturl/2").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/b");
}

#[tokio::test]
async fn test_shorten_does_not_normalize() {
    let server = common::api_server(common::create_test_state());

    let plain = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let slashed = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(plain["short_url"], 1);
    assert_eq!(slashed["short_url"], 2);
    assert_eq!(slashed["original_url"], "https://example.com/");
}

#[tokio::test]
async fn test_shorten_rejects_invalid_urls() {
    let server = common::api_server(common::create_test_state());

    for url in [
        "not-a-url",
        "ftp://example.com",
        "http://",
        "",
        "http://this-host-does-not-exist.invalid",
    ] {
        let response = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "invalid url" }));
    }
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::api_server(common::create_test_state());

    let response = server.post("/api/shorturl").json(&json!({})).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_malformed_json_body() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_ip_literal_host() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "http://127.0.0.1:8080/x" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_rejected_url_consumes_no_code() {
    let server = common::api_server(common::create_test_state());

    server
        .post("/api/shorturl")
        .json(&json!({ "url": "ftp://example.com" }))
        .await
        .assert_json(&json!({ "error": "invalid url" }));

    let json = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let server = common::api_server(common::create_test_state());

    for url in ["https://example.com/a\nb", "https://example.com/\t"] {
        let response = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "invalid url" }));
    }

    let response = server.get("/api/shorturl/1").await;
    response.assert_json(&json!({
        "error": "No short URL found for the given input"
    }));
}

#[tokio::test]
async fn test_every_registered_url_redirects() {
    let server = common::api_server(common::create_test_state());

    for url in [
        "https://example.com/a b",
        "https://example.com/caf\u{e9}",
        "https://example.com/?q=\"x\"",
    ] {
        let json = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await
            .json::<serde_json::Value>();
        let code = json["short_url"].as_i64().unwrap();

        let response = server.get(&format!("/api/shorturl/{code}")).await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location").as_bytes(), url.as_bytes());
    }
}

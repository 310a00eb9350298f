//! Integration tests for the request dispatcher.
//!
//! A wiremock server stands in for the Board API so the tests can inspect
//! exactly what went over the wire.

mod common;

use std::collections::HashMap;

use board_client::{BoardClient, Error, QueryParams, Request, UpdateClientRequest};
use common::{API_KEY, API_TOKEN, TestApi, client_json, page, project_json};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// Serve one raw HTTP response on a local port and return a base URL for it.
async fn serve_raw(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "{}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/v1", addr)
}

fn raw_client(base_url: String) -> BoardClient {
    BoardClient::builder()
        .api_key(API_KEY)
        .api_token(API_TOKEN)
        .base_url(base_url)
        .build()
        .unwrap()
}

fn header_value<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

// ─────────────────────────────────────────────────────────────────────────────
// Headers and bodies
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_every_request_carries_auth_headers() {
    let api = TestApi::start().await;

    Mock::given(path("/v1/clients/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(1)))
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/clients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(client_json(2)))
        .mount(&api.server)
        .await;

    api.client.clients().get(1, None).await.unwrap();
    api.client.clients().create(Default::default()).await.unwrap();
    api.client.clients().delete(1).await.unwrap();

    let requests = api.requests().await;
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert_eq!(header_value(request, "x-api-key"), Some(API_KEY));
        assert_eq!(
            header_value(request, "authorization"),
            Some(format!("Bearer {}", API_TOKEN).as_str())
        );
    }
}

#[tokio::test]
async fn test_get_never_sends_a_body() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clients/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(42)))
        .mount(&api.server)
        .await;

    let request = Request::get("/clients/42")
        .json(&json!({ "ignored": true }))
        .unwrap();
    let _: Value = api.client.execute(request).await.unwrap();

    let requests = api.requests().await;
    assert!(requests[0].body.is_empty());
    assert!(header_value(&requests[0], "content-type").is_none());
}

#[tokio::test]
async fn test_update_sends_only_supplied_fields() {
    let api = TestApi::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/clients/99"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "archive_flg": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(99)))
        .expect(1)
        .mount(&api.server)
        .await;

    let updated = api
        .client
        .clients()
        .update(
            99,
            UpdateClientRequest {
                archive_flg: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 99);

    let requests = api.requests().await;
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"archive_flg":true}"#
    );
}

#[tokio::test]
async fn test_delete_without_body_has_no_content_type() {
    let api = TestApi::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/projects/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&api.server)
        .await;

    api.client.projects().delete(5).await.unwrap();

    let requests = api.requests().await;
    assert!(requests[0].body.is_empty());
    assert!(header_value(&requests[0], "content-type").is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// URLs and query strings
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bare_list_has_no_query_string() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![project_json(1)])))
        .mount(&api.server)
        .await;

    let projects = api.client.projects().list().await.unwrap();
    assert_eq!(projects.items.len(), 1);

    let requests = api.requests().await;
    assert_eq!(requests[0].url.query(), None);
    assert!(!requests[0].url.as_str().ends_with('?'));
}

#[tokio::test]
async fn test_query_values_round_trip() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clients"))
        .and(query_param("page", "2"))
        .and(query_param("include_archive_flg", "true"))
        .and(query_param("name", "a b&c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .expect(1)
        .mount(&api.server)
        .await;

    let query = QueryParams::new()
        .with("page", 2u32)
        .with("include_archive_flg", true)
        .with("name", "a b&c");
    let _: Value = api
        .client
        .execute(Request::get("/clients").query(query))
        .await
        .unwrap();

    let requests = api.requests().await;
    let pairs: HashMap<String, String> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs["page"], "2");
    assert_eq!(pairs["include_archive_flg"], "true");
    assert_eq!(pairs["name"], "a b&c");
}

#[tokio::test]
async fn test_repeated_get_is_not_cached() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clients/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(7)))
        .expect(2)
        .mount(&api.server)
        .await;

    api.client.clients().get(7, None).await.unwrap();
    api.client.clients().get(7, None).await.unwrap();

    let requests = api.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(
        header_value(&requests[0], "authorization"),
        header_value(&requests[1], "authorization")
    );
}

#[tokio::test]
async fn test_path_with_query_is_rejected_before_sending() {
    let api = TestApi::start().await;

    let err = api
        .client
        .execute::<Value>(Request::get("/clients?page=1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPath(_)));
    assert!(api.requests().await.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_failure_keeps_status_and_body() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clients/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&api.server)
        .await;

    let err = api
        .client
        .execute::<Value>(Request::get("/clients/42"))
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            ref status_text,
            ref body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
            assert_eq!(body, "not found");
        }
        ref other => panic!("expected API error, got {:?}", other),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_http_failure_keeps_server_reason_phrase() {
    let client = raw_client(serve_raw("HTTP/1.1 404 Client Missing", "not found").await);

    let err = client
        .execute::<Value>(Request::get("/clients/42"))
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            status_text,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Client Missing");
            assert_eq!(body, "not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_failure_with_unregistered_status_keeps_phrase() {
    let client = raw_client(serve_raw("HTTP/1.1 599 Upstream Gone", "not found").await);

    let err = client
        .execute::<Value>(Request::get("/clients/42"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(599));
    assert!(err.to_string().starts_with("API request failed: 599 Upstream Gone"));
}

#[tokio::test]
async fn test_http_failure_on_no_content_call() {
    let api = TestApi::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/invoices/invoice_status/1"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"errors":["locked"]}"#))
        .mount(&api.server)
        .await;

    let err = api
        .client
        .invoices()
        .update_status(1, board_client::InvoiceStatus::Paid)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().ends_with(r#"{"errors":["locked"]}"#));
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_failure() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&api.server)
        .await;

    let err = api.client.projects().get(1, None).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_invalid_utf8_is_a_decode_failure() {
    let api = TestApi::start().await;

    let mut body = br#"{"name":""#.to_vec();
    body.push(0xff);
    body.extend_from_slice(br#""}"#);

    Mock::given(method("GET"))
        .and(path("/v1/clients/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "application/json"),
        )
        .mount(&api.server)
        .await;

    let err = api
        .client
        .execute::<Value>(Request::get("/clients/1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_failure() {
    let client = BoardClient::builder()
        .api_key(API_KEY)
        .api_token(API_TOKEN)
        .base_url("http://127.0.0.1:1/v1")
        .build()
        .unwrap();

    let err = client.clients().list().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_no_content_response_is_not_parsed() {
    let api = TestApi::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/clients/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&api.server)
        .await;

    api.client.clients().delete(3).await.unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let api = TestApi::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clients/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(1)))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![project_json(2)])))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/clients/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&api.server)
        .await;

    let clients = api.client.clients();
    let projects = api.client.projects();
    let (found, listed, missing) = tokio::join!(
        clients.get(1, None),
        projects.list(),
        clients.get(404, None),
    );

    assert_eq!(found.unwrap().id, 1);
    assert_eq!(listed.unwrap().items[0].id, 2);
    assert!(missing.unwrap_err().is_not_found());
}

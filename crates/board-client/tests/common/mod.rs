//! Common test utilities for integration tests.

#![allow(dead_code)]

use board_client::BoardClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";
pub const API_TOKEN: &str = "test-token";

/// A fake Board API and a client pointed at it.
pub struct TestApi {
    pub server: MockServer,
    pub client: BoardClient,
}

impl TestApi {
    /// Start a mock server; the client's base URL carries a `/v1` prefix.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = BoardClient::builder()
            .api_key(API_KEY)
            .api_token(API_TOKEN)
            .base_url(format!("{}/v1", server.uri()))
            .build()
            .expect("client should build");
        Self { server, client }
    }

    /// All requests the server has seen so far.
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }
}

/// Wrap items in the list envelope.
pub fn page(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({
        "items": items,
        "total": total,
        "current_page": 1,
        "per_page": 20,
        "last_page": 1
    })
}

pub fn client_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Example Inc.",
        "name_kana": "エグザンプル",
        "code": format!("C-{}", id),
        "short_name": "Example",
        "archive_flg": false,
        "created_at": "2024-01-01T00:00:00+09:00",
        "updated_at": "2024-01-01T00:00:00+09:00"
    })
}

pub fn branch_json(id: u64, client_id: u64) -> Value {
    json!({
        "id": id,
        "client_id": client_id,
        "name": "Osaka",
        "code": format!("B-{}", id),
        "archive_flg": false,
        "created_at": "2024-01-01T00:00:00+09:00",
        "updated_at": "2024-01-01T00:00:00+09:00"
    })
}

pub fn project_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Website renewal",
        "code": format!("P-{}", id),
        "status": "active",
        "created_at": "2024-01-01T00:00:00+09:00",
        "updated_at": "2024-01-01T00:00:00+09:00"
    })
}

pub fn invoice_json(id: u64, status: u8) -> Value {
    json!({
        "id": id,
        "project_id": 3,
        "project_no": 1200,
        "management_no": "1200-1",
        "name": "April invoice",
        "total": 110000,
        "tax": 10000,
        "cost_total": 50000,
        "cost_tax": 5000,
        "invoice_date": "2024-04-30",
        "payment_limit_date": "2024-05-31",
        "order_status": 5,
        "order_status_name": "Ordered",
        "invoice_status": status,
        "invoice_status_name": "Billed",
        "currency": "JPY",
        "created_at": "2024-04-01T00:00:00+09:00",
        "updated_at": "2024-04-30T00:00:00+09:00"
    })
}

pub fn payment_json(id: u64, status: u8) -> Value {
    json!({
        "id": id,
        "expenditure_id": 8,
        "expenditure_no": 300,
        "management_no": "300-1",
        "name": "Hosting",
        "total": 22000,
        "tax": 2000,
        "tax_withholding": 0,
        "invoice_date": "2024-04-30",
        "payment_date": "2024-05-31",
        "expenditure_status": 5,
        "expenditure_status_name": "Ordered",
        "payment_status": status,
        "payment_status_name": "Paid",
        "payment_method_kbn": 1,
        "payment_method_kbn_name": "Bank transfer",
        "currency": "JPY",
        "created_at": "2024-04-01T00:00:00+09:00",
        "updated_at": "2024-04-30T00:00:00+09:00",
        "lock_flg": 0
    })
}

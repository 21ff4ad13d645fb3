use common::logger::init_logger;
use httpmock::prelude::GET;
use httpmock::MockServer;
use serde_json::Value;
use std::net::TcpListener;
use std::time::Duration;

/// Fixed clock used by timestamp tests, 2023-11-14T22:13:20Z.
pub const MOCK_NOW: f64 = 1_700_000_000.0;

pub fn load_test_env() {
    dotenv::from_filename(".env_test").ok();
}

pub fn init_logging() {
    load_test_env();
    let _res = init_logger("Testing");
}

/// Serves `body` with status 200 on `GET path`.
pub async fn start_json_server(path: &str, body: &str) -> MockServer {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;
    server
}

pub async fn start_document_server(path: &str, document: &Value) -> MockServer {
    start_json_server(path, &document.to_string()).await
}

pub async fn start_status_server(path: &str, status: u16) -> MockServer {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(status).body("error");
        })
        .await;
    server
}

pub async fn start_delayed_server(path: &str, body: &str, delay: Duration) -> MockServer {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body(body)
                .delay(delay);
        })
        .await;
    server
}

/// A local port nothing listens on.
pub fn closed_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .unwrap_or(1)
}

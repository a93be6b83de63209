//! Unit tests for the HTTP health endpoint.
//! Spins up the REST server on a random port and sends a GET /health request.

use std::sync::Arc;

use serde_json::Value;
use taskd::{config::DaemonConfig, AppContext};

#[tokio::test]
async fn test_health_endpoint_response_fields() {
    let config = Arc::new(DaemonConfig::default());
    let ctx = Arc::new(AppContext::new(config));
    let router = taskd::rest::build_router(ctx);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_secs"].is_u64());
}

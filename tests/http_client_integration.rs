//! HttpApiClient against a local one-shot HTTP stub.

use recurrente_mcp::adapters::{HttpApiClient, RecurrenteConfig};
use recurrente_mcp::ports::{ApiClient, ApiError, ApiRequest};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the stub saw: the lowercased request head and the raw body.
struct Captured {
    head: String,
    body: String,
}

/// Serves exactly one request with the given status line and body.
async fn stub(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];
        let head_end = loop {
            let read = socket.read(&mut chunk).await.unwrap();
            assert!(read > 0, "client closed before sending headers");
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|value| value.trim().parse::<usize>().unwrap())
            .unwrap_or(0);
        while buffer.len() < head_end + content_length {
            let read = socket.read(&mut chunk).await.unwrap();
            assert!(read > 0, "client closed before sending body");
            buffer.extend_from_slice(&chunk[..read]);
        }
        let request_body =
            String::from_utf8_lossy(&buffer[head_end..head_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        Captured {
            head,
            body: request_body,
        }
    });

    (base_url, handle)
}

fn client(base_url: &str) -> HttpApiClient {
    HttpApiClient::new(RecurrenteConfig::new("pk_test_abc", "sk_test_xyz").with_base_url(base_url))
        .unwrap()
}

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn sends_credentials_query_and_json_body() {
    let (base_url, stub) = stub("201 Created", r#"{"id":"ch_1"}"#).await;

    let request = ApiRequest::post("/api/checkouts/")
        .with_query("page", Some(3))
        .with_query("user_id", None::<String>)
        .with_body(json!({ "checkout": { "items": [{ "price_id": "price_1" }] } }));
    let body = client(&base_url).request(request).await.unwrap();

    assert_eq!(body, json!({ "id": "ch_1" }));

    let captured = stub.await.unwrap();
    assert!(captured.head.starts_with("post /api/checkouts/?page=3 http/1.1"));
    assert!(captured.head.contains("x-public-key: pk_test_abc"));
    assert!(captured.head.contains("x-secret-key: sk_test_xyz"));
    assert!(captured.head.contains("accept: application/json"));
    assert!(captured.head.contains("content-type: application/json"));

    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["checkout"]["items"][0]["price_id"], "price_1");
}

#[tokio::test]
async fn get_without_body_sends_no_content() {
    let (base_url, stub) = stub("200 OK", "").await;

    let body = client(&base_url)
        .request(ApiRequest::get("/api/coupons/cp_1"))
        .await
        .unwrap();

    assert_eq!(body, json!({}));
    let captured = stub.await.unwrap();
    assert!(captured.head.starts_with("get /api/coupons/cp_1 http/1.1"));
    assert!(captured.body.is_empty());
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn error_status_carries_pretty_detail() {
    let (base_url, stub) = stub("401 Unauthorized", r#"{"error":"bad keys"}"#).await;

    let err = client(&base_url)
        .request(ApiRequest::get("/api/products"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: "{\n  \"error\": \"bad keys\"\n}".to_string(),
        }
    );
    stub.await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&base_url)
        .request(ApiRequest::get("/api/products"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

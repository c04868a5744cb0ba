// SPDX-License-Identifier: Apache-2.0

use officedir_server::{build_router, ApiConfig, AppState};
use officedir_store::DirectoryStore;
use std::net::SocketAddr;
use std::sync::mpsc;
use tempfile::{tempdir, TempDir};
use tiny_http::{Response, Server, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// One-shot upstream stub: answers a single request with the given
/// status and body, then reports what it saw.
fn spawn_upstream(status: u16, body: &'static str) -> (String, mpsc::Receiver<(String, String)>) {
    let server = Server::http("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut seen_body = String::new();
            let _ = std::io::Read::read_to_string(request.as_reader(), &mut seen_body);
            let url = request.url().to_string();
            let _ = request.respond(Response::from_string(body).with_status_code(StatusCode(status)));
            let _ = tx.send((url, seen_body));
        }
    });
    (base_url, rx)
}

async fn spawn_app(config: ApiConfig) -> (TempDir, SocketAddr) {
    let root = tempdir().expect("tempdir");
    let state = AppState::new(DirectoryStore::new(root.path()), config);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    (root, addr)
}

async fn send(addr: SocketAddr, raw: String) -> String {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    stream.write_all(raw.as_bytes()).await.expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}

async fn post_json(addr: SocketAddr, path: &str, body: &str) -> String {
    send(
        addr,
        format!(
            "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await
}

#[tokio::test]
async fn contact_forwards_submission_to_mail_provider() {
    let (mail_url, seen) = spawn_upstream(202, "{}");
    let config = ApiConfig {
        mail_api_key: Some("test-key".to_string()),
        mail_base_url: mail_url,
        mail_to_email: "advisory@officedir.example".to_string(),
        ..ApiConfig::default()
    };
    let (_root, addr) = spawn_app(config).await;

    let response = post_json(
        addr,
        "/v1/contact",
        r#"{"name": "Robin", "email": "robin@example.com", "company": "Chinook Robotics", "message": "Looking for 8,000 sq ft."}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Email sent successfully"));

    let (url, body) = seen.recv_timeout(std::time::Duration::from_secs(5)).expect("upstream hit");
    assert_eq!(url, "/v1/email");
    assert!(body.contains("robin@example.com"));
    assert!(body.contains("Looking for 8,000 sq ft."));
    assert!(body.contains("advisory@officedir.example"));
}

#[tokio::test]
async fn mail_provider_failure_reads_as_generic_error() {
    let (mail_url, _seen) = spawn_upstream(500, r#"{"message": "upstream exploded"}"#);
    let config = ApiConfig {
        mail_api_key: Some("test-key".to_string()),
        mail_base_url: mail_url,
        ..ApiConfig::default()
    };
    let (_root, addr) = spawn_app(config).await;

    let response = post_json(
        addr,
        "/v1/contact",
        r#"{"email": "robin@example.com", "message": "hello"}"#,
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 500"));
    assert!(response.contains("Failed to send email. Please try again later."));
    // The provider's own error body never leaks to the browser.
    assert!(!response.contains("upstream exploded"));
}

#[tokio::test]
async fn geocode_proxies_and_formats_suggestions() {
    let (geo_url, seen) = spawn_upstream(
        200,
        r#"[{
            "display_name": "855, 2 Street Southwest, Calgary, Alberta, Canada",
            "lat": "51.0452",
            "lon": "-114.0687",
            "address": {"house_number": "855", "road": "2 Street SW", "city": "Calgary", "state": "Alberta"}
        }]"#,
    );
    let config = ApiConfig {
        geocode_base_url: geo_url,
        ..ApiConfig::default()
    };
    let (_root, addr) = spawn_app(config).await;

    let response = send(
        addr,
        format!(
            "GET /v1/geocode?q=855%202%20St HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
        ),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("\"formatted\":\"855 2 Street SW, Calgary, Alberta\""));

    let (url, _body) = seen.recv_timeout(std::time::Duration::from_secs(5)).expect("upstream hit");
    assert!(url.starts_with("/search?"));
    // The city hint rides along with the raw query.
    assert!(url.contains("Calgary"));
    assert!(url.contains("addressdetails=1"));
    assert!(url.contains("limit=5"));
}

#[tokio::test]
async fn geocode_upstream_failure_reads_as_generic_error() {
    let (geo_url, _seen) = spawn_upstream(503, "overloaded");
    let config = ApiConfig {
        geocode_base_url: geo_url,
        ..ApiConfig::default()
    };
    let (_root, addr) = spawn_app(config).await;

    let response = send(
        addr,
        format!(
            "GET /v1/geocode?q=855%202%20St HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
        ),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 500"));
    assert!(response.contains("Address lookup is unavailable"));
}

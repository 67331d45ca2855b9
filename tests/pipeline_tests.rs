//! End-to-end pipeline tests
//!
//! These run the full validate → fetch → parse → extract pipeline against
//! a throwaway local TCP listener serving canned responses, so no external
//! network is touched.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use brandkit::{extract_branding, Error};

/// Serve one canned HTTP response on an ephemeral local port and return
/// the base URL to request.
async fn serve_response(response: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

async fn serve_html(body: &str) -> String {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    serve_response(response.into_bytes()).await
}

#[tokio::test]
async fn test_extracts_branding_end_to_end() {
    let base = serve_html(
        r##"<!DOCTYPE html>
<html>
  <head>
    <title>Test Company</title>
    <meta name="description" content="A test company description">
    <link rel="icon" href="/favicon.ico">
    <link href="https://fonts.googleapis.com/css2?family=Roboto&display=swap" rel="stylesheet">
    <style>
      .primary { color: #3B82F6; }
      .secondary { color: #10B981; }
    </style>
  </head>
  <body>
    <header><img class="logo" src="/images/logo.png" alt="Logo"></header>
  </body>
</html>"##,
    )
    .await;

    let branding = extract_branding(&base).await.expect("extraction succeeds");

    assert_eq!(branding.metadata.title, Some("Test Company".to_string()));
    assert_eq!(
        branding.metadata.description,
        Some("A test company description".to_string())
    );
    assert_eq!(branding.logo, Some(format!("{base}/images/logo.png")));
    assert_eq!(branding.metadata.favicon, Some(format!("{base}/favicon.ico")));
    assert_eq!(branding.fonts.heading, "Roboto");
    assert_eq!(branding.fonts.body, "Inter");

    let primary = branding.colors.primary.as_deref().expect("primary color");
    assert!(primary == "#3b82f6" || primary == "#10b981");
    assert_eq!(branding.colors.background, "#ffffff");
    assert_eq!(branding.colors.text, "#1a1a1a");
}

#[tokio::test]
async fn test_invalid_scheme_is_invalid_input() {
    for url in ["ftp://test.com", "file:///etc/hosts", "javascript:alert(1)"] {
        let err = extract_branding(url).await.unwrap_err();
        assert!(
            matches!(err, Error::InvalidUrl(_)),
            "{url} should fail validation, got: {err}"
        );
    }
}

#[tokio::test]
async fn test_malformed_string_is_invalid_input() {
    let err = extract_branding("not-a-url").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_wrapped_failure() {
    // Bind then immediately drop a listener so the port is known-closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = extract_branding(&format!("http://{addr}")).await.unwrap_err();
    assert!(
        matches!(err, Error::ExtractionFailed(_)),
        "transport failure must wrap, got: {err}"
    );
    assert!(err.to_string().starts_with("Failed to extract branding:"));
}

#[tokio::test]
async fn test_server_error_status_is_wrapped_failure() {
    let base = serve_response(
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_vec(),
    )
    .await;

    let err = extract_branding(&base).await.unwrap_err();
    assert!(matches!(err, Error::ExtractionFailed(_)));
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn test_oversized_body_is_wrapped_failure() {
    // One byte past the 5 MB cap.
    let body = "x".repeat(5 * 1024 * 1024 + 1);
    let base = serve_html(&body).await;

    let err = extract_branding(&base).await.unwrap_err();
    assert!(matches!(err, Error::ExtractionFailed(_)));
    assert!(err.to_string().contains("exceeded"), "got: {err}");
}

#[tokio::test]
async fn test_non_html_body_still_succeeds_with_defaults() {
    // The parser never fails outright; a text body just yields no signals.
    let base = serve_html("plain text, no markup at all").await;

    let branding = extract_branding(&base).await.expect("extraction succeeds");
    assert_eq!(branding.logo, None);
    assert_eq!(branding.metadata.title, None);
    assert_eq!(branding.fonts.heading, "Inter");
    assert_eq!(branding.metadata.favicon, Some(format!("{base}/favicon.ico")));
}

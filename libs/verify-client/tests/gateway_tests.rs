//! Integration tests for the gateway's request/response pipeline.
//!
//! A mock HTTP server stands in for the verification service; the
//! connection-level cases use a port that was bound and released so the
//! connect reliably fails.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use verify_client::{ClientConfig, VerifyClient};
use verify_sdk::{LabelVerification, UploadPayload, VerifyError};

fn client_for(base_url: &str) -> VerifyClient {
    VerifyClient::new(ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    })
}

fn sample_payload() -> UploadPayload {
    UploadPayload::new()
        .file("image", "label.png", mime::IMAGE_PNG, &b"fake png bytes"[..])
        .text("brand_name", "Old Tom")
}

fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn success_returns_the_body_verbatim() {
    let server = MockServer::start();
    let expected = json!({
        "success": true,
        "matches": {"brand_name": true},
        "mismatches": [],
        "raw_ocr_text": "OLD TOM GIN",
        "message": "All fields verified successfully",
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/verify")
            .header_matches("content-type", "multipart/form-data; boundary=.*");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(expected.clone());
    });

    let client = client_for(&server.base_url());
    let body = client.verify_label(sample_payload()).await.unwrap();

    mock.assert();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn rejection_uses_the_detail_field() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/api/verify");
        then.status(422)
            .header("content-type", "application/json")
            .json_body(json!({"detail": "bad image"}));
    });

    let client = client_for(&server.base_url());
    let err = client.verify_label(sample_payload()).await.unwrap_err();

    assert_eq!(err, VerifyError::remote_rejected("bad image"));
    assert_eq!(err.message(), "bad image");
}

#[tokio::test]
async fn rejection_without_detail_falls_back() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/api/verify");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({"error": "boom"}));
    });

    let client = client_for(&server.base_url());
    let err = client.verify_label(sample_payload()).await.unwrap_err();

    assert_eq!(err.message(), "Verification failed");
    assert!(matches!(err, VerifyError::RemoteRejected { .. }));
}

#[tokio::test]
async fn rejection_with_unparseable_body_falls_back() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/api/verify");
        then.status(502).body("<html>bad gateway</html>");
    });

    let client = client_for(&server.base_url());
    let err = client.verify_label(sample_payload()).await.unwrap_err();

    assert_eq!(err, VerifyError::verification_failed());
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let client = client_for(&refused_base_url());
    let err = client.verify_label(sample_payload()).await.unwrap_err();

    assert_eq!(err, VerifyError::network());
    assert_eq!(err.message(), "Network error occurred");
}

#[tokio::test]
async fn timeout_is_a_network_error() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/api/verify");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true}))
            .delay(Duration::from_secs(5));
    });

    let client = VerifyClient::new(ClientConfig {
        base_url: server.base_url(),
        timeout_ms: 250,
    });
    let err = client.verify_label(sample_payload()).await.unwrap_err();

    assert_eq!(err, VerifyError::network());
}

#[tokio::test]
async fn health_probe_returns_the_raw_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"status": "healthy"}));
    });

    let client = client_for(&server.base_url());
    let response = client.health_check().await.unwrap();

    mock.assert();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn health_probe_surfaces_raw_transport_errors() {
    let client = client_for(&refused_base_url());
    let err = client.health_check().await.unwrap_err();

    // Deliberately not a VerifyError: probes pass the transport through.
    assert!(err.is_connect() || err.is_request());
}

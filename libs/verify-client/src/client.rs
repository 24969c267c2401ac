//! The verification gateway client.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart;
use serde_json::Value;
use tracing::instrument;

use verify_sdk::{LabelVerification, PayloadPart, UploadPayload, VerifyError};

use crate::config::ClientConfig;

const VERIFY_ROUTE: &str = "/api/verify";
const HEALTH_ROUTE: &str = "/api/health";

/// HTTP client for the label verification service.
///
/// Holds the connection defaults (base address, timeout, default content
/// headers) and a pooled transport. `Clone` is cheap; all clones share the
/// same pool and the same immutable [`ClientConfig`].
#[derive(Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl VerifyClient {
    /// Create a new client from connection defaults.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created (should never happen
    /// with valid config).
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        #[allow(clippy::expect_used)]
        // Safe: reqwest client creation only fails with invalid TLS config
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    /// The connection defaults this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Liveness probe: GET the service's health route.
    ///
    /// Unlike [`LabelVerification::verify_label`], the transport result is
    /// passed through untouched — callers see the raw response or the raw
    /// `reqwest` error. Probes are transport-level by contract.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn health_check(&self) -> reqwest::Result<reqwest::Response> {
        self.http.get(self.config.endpoint(HEALTH_ROUTE)).send().await
    }
}

#[async_trait]
impl LabelVerification for VerifyClient {
    #[instrument(
        skip(self, payload),
        fields(base_url = %self.config.base_url, parts = payload.len())
    )]
    async fn verify_label(&self, payload: UploadPayload) -> Result<Value, VerifyError> {
        let response = self
            .http
            .post(self.config.endpoint(VERIFY_ROUTE))
            .multipart(into_form(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "verification request never reached the service");
                VerifyError::network()
            })?;

        let status = response.status();
        // A body that cuts off mid-read means no complete response arrived.
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "verification response body cut short");
            VerifyError::network()
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(Value::as_str).map(ToOwned::to_owned));
            tracing::warn!(status = %status, "verification rejected by service");
            return Err(match detail {
                Some(message) => VerifyError::remote_rejected(message),
                None => VerifyError::verification_failed(),
            });
        }

        tracing::debug!(status = %status, bytes = body.len(), "verification response received");
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            // Non-JSON success bodies pass through as plain text.
            Err(_) => Ok(Value::String(body)),
        }
    }
}

/// Encode the payload parts as a multipart form, in insertion order.
///
/// The multipart content type (with boundary) set here overrides the
/// client's JSON default for this one request.
fn into_form(payload: UploadPayload) -> multipart::Form {
    let mut form = multipart::Form::new();
    for part in payload.into_parts() {
        form = match part {
            PayloadPart::Text { name, value } => form.text(name, value),
            PayloadPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                #[allow(clippy::expect_used)]
                // Safe: the type came from a parsed `Mime` and always round-trips
                let file = multipart::Part::bytes(data.to_vec())
                    .file_name(file_name)
                    .mime_str(content_type.as_ref())
                    .expect("valid mime type");
                form.part(name, file)
            }
        };
    }
    form
}

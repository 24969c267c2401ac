//! Gateway API trait.

use async_trait::async_trait;

use crate::error::VerifyError;
use crate::models::UploadPayload;

/// Object-safe contract for submitting label images for verification.
///
/// Implementations own the transport; callers only ever see the verbatim
/// response body or a normalized [`VerifyError`]:
///
/// ```ignore
/// match gateway.verify_label(payload).await {
///     Ok(body) => render(body),
///     Err(err) => toast(err.message()),
/// }
/// ```
///
/// Liveness probing is deliberately *not* part of this contract — probes
/// are transport-level and live on the concrete client, raw errors and all.
#[async_trait]
pub trait LabelVerification: Send + Sync {
    /// Submit an upload payload to the verification service.
    ///
    /// The payload is sent as one multipart request; invoking this twice
    /// produces two independent submissions. Returns the response body
    /// unmodified on success.
    async fn verify_label(&self, payload: UploadPayload)
    -> Result<serde_json::Value, VerifyError>;
}

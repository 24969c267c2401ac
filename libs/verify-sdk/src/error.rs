//! Normalized gateway error.
//!
//! Transport-agnostic error definitions for the verification gateway.
//! Every failure the gateway can hit collapses into one of exactly two
//! causes before it reaches a caller; nobody downstream inspects status
//! codes or transport error types.

use thiserror::Error;

/// Fallback message when the service rejects a submission without a
/// usable `detail` field in its error body.
pub const VERIFICATION_FAILED: &str = "Verification failed";

/// Message for every failure where no response was received at all.
pub const NETWORK_ERROR: &str = "Network error occurred";

/// Error type for gateway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The service was reached and declined or failed the request.
    #[error("{message}")]
    RemoteRejected { message: String },

    /// No response was received: connectivity failure, DNS failure, or
    /// timeout expiry.
    #[error("{message}")]
    Network { message: String },
}

impl VerifyError {
    /// Create a rejection error carrying the service's own message.
    #[must_use]
    pub fn remote_rejected(message: impl Into<String>) -> Self {
        Self::RemoteRejected {
            message: message.into(),
        }
    }

    /// Create a rejection error with the fixed fallback message.
    #[must_use]
    pub fn verification_failed() -> Self {
        Self::RemoteRejected {
            message: VERIFICATION_FAILED.to_string(),
        }
    }

    /// Create a network error with the fixed message.
    #[must_use]
    pub fn network() -> Self {
        Self::Network {
            message: NETWORK_ERROR.to_string(),
        }
    }

    /// The user-facing message, ready to be shown as-is.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RemoteRejected { message } | Self::Network { message } => message,
        }
    }
}

//! Label Verification SDK
//!
//! This crate provides the transport-agnostic contract for the label
//! verification gateway: the API trait, the multipart payload and report
//! models, and the normalized error type.
//!
//! ## Usage
//!
//! ```ignore
//! use verify_sdk::{LabelVerification, UploadPayload};
//!
//! let payload = UploadPayload::new()
//!     .file("image", "label.png", mime::IMAGE_PNG, bytes)
//!     .text("brand_name", "Old Tom");
//!
//! let body = gateway.verify_label(payload).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// API trait
pub use api::LabelVerification;

// Error types
pub use error::{NETWORK_ERROR, VERIFICATION_FAILED, VerifyError};

// Models
pub use models::{LabelFields, PayloadPart, UploadPayload, VerificationReport};

//! HTTP gateway to the label verification service.
//!
//! This crate is the single point of contact with the remote service. It
//! hides the transport and the error shapes behind the `verify_sdk`
//! contract:
//!
//! ```ignore
//! use verify_client::{ClientConfig, VerifyClient};
//! use verify_sdk::LabelVerification;
//!
//! let client = VerifyClient::new(ClientConfig::from_env());
//! let body = client.verify_label(payload).await?;
//! ```
//!
//! The client is built once at startup and shared by cloning — the
//! underlying connection pool is reference-counted, so clones are cheap
//! and configuration stays immutable after construction.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod client;
mod config;

pub use client::VerifyClient;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};

//! Judge0 remote execution service
//!
//! The gateway never runs code itself. Everything goes through the
//! [`ExecutionBackend`] trait, implemented over HTTP by [`Judge0Client`].

pub mod client;
pub mod encoding;
pub mod error;
pub mod types;

pub use client::Judge0Client;
pub use error::TransportError;
pub use types::{StatusKind, SubmissionResult, SubmissionStatus};

use async_trait::async_trait;

/// Submission/poll contract of the remote execution service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Create a job without waiting for it; returns its token
    async fn submit(&self, language_id: u32, source_code: &str) -> Result<String, TransportError>;

    /// Fetch the current state of a job
    async fn fetch(&self, token: &str) -> Result<SubmissionResult, TransportError>;

    /// List the languages the service supports
    async fn list_languages(&self) -> Result<Vec<serde_json::Value>, TransportError>;
}

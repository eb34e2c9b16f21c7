//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::execution::{CancelSignal, PollPolicy};
use crate::judge0::ExecutionBackend;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Remote execution service
    backend: Arc<dyn ExecutionBackend>,

    /// Poll bounds derived from configuration
    poll_policy: PollPolicy,

    /// Fires on server shutdown
    shutdown: CancelSignal,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(backend: Arc<dyn ExecutionBackend>, config: Config, shutdown: CancelSignal) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                backend,
                poll_policy: config.polling.policy(),
                shutdown,
                config,
            }),
        }
    }

    /// Get a reference to the execution backend
    pub fn backend(&self) -> &dyn ExecutionBackend {
        &*self.inner.backend
    }

    pub fn poll_policy(&self) -> &PollPolicy {
        &self.inner.poll_policy
    }

    /// Signal handed to each poll loop so shutdown stops in-flight polling
    pub fn cancel_signal(&self) -> CancelSignal {
        self.inner.shutdown.clone()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

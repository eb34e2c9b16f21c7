//! Judge Gateway - remote code execution front end
//!
//! This library runs user submissions on a Judge0 instance and turns the
//! outcome into a normalized verdict.
//!
//! # Features
//!
//! - Language resolution (Python, Java, C++, C#, SQL)
//! - Test harness generation for single test case runs
//! - Asynchronous submission with a bounded, cancellable poll loop
//! - Structured verdicts: console output, pass/fail, categorized failures
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Request flow (harness, submit, poll, interpret)
//! - **Execution**: Harness strategies, poll loop, result interpretation
//! - **Judge0**: Wire types and the HTTP client for the remote service
//! - **Models**: Languages and execution requests

pub mod config;
pub mod constants;
pub mod error;
pub mod execution;
pub mod handlers;
pub mod judge0;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

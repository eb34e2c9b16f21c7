//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod diagnostics;
pub mod execute;
pub mod health;

use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(execute::routes())
        .merge(diagnostics::routes())
}

/// Routes plus the HTTP layers, bound to `state`
pub fn router(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

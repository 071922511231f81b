//! Middleware stack for the env API.
//!
//! Layer order: Request → Tracing → CORS → Timeout → Handler

pub mod cors;
pub mod metrics;
pub mod timeout;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{ApiMetrics, RequestTimer};
pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;

use crate::domain::config::ApiConfig;
use tower_http::cors::CorsLayer;

/// Middleware stack builder
pub struct MiddlewareStack {
    pub tracing: TracingLayer,
    pub cors: CorsLayer,
    pub timeout: TimeoutLayer,
}

impl MiddlewareStack {
    /// Create middleware stack from API config
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            tracing: TracingLayer::new(),
            cors: create_cors_layer(&config.cors),
            timeout: TimeoutLayer::new(config.timeouts.request),
        }
    }
}

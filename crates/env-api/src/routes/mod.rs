//! HTTP handlers.

pub mod env;
pub mod page;

pub use env::{get_env, health_check, metrics, read_snapshot};
pub use page::{index, render_page};

use crate::domain::config::ExposureConfig;
use crate::middleware::ApiMetrics;
use crate::ports::EnvironmentSource;
use std::sync::Arc;

/// Shared state for handlers
#[derive(Clone)]
pub struct AppState {
    pub exposure: Arc<ExposureConfig>,
    pub source: Arc<dyn EnvironmentSource>,
    pub metrics: Arc<ApiMetrics>,
}

//! Env API - exposes the process environment over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          env-api                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  GET /api/env   GET /   GET /health   GET /metrics           │
//! │         │                                                     │
//! │  ┌──────┴──────────────────────────────────┐                 │
//! │  │  Middleware: Tracing → CORS → Timeout    │                 │
//! │  └──────┬──────────────────────────────────┘                 │
//! │         │                                                     │
//! │  ┌──────┴──────────────┐     ┌──────────────────────────┐    │
//! │  │  Exposure policy    │ ──▶ │  EnvironmentSource port  │    │
//! │  │  filtered/unfiltered│     │  process | static        │    │
//! │  └─────────────────────┘     └──────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Exposure
//!
//! - **filtered** (default): names starting with `NEXT_PUBLIC_` plus a fixed
//!   allow-list. An empty result is replaced by three example entries.
//! - **unfiltered**: every variable, secrets included. Debug use only.
//!
//! # Usage
//!
//! ```ignore
//! use env_api::{ApiConfig, EnvApiService, ProcessEnvironment};
//! use std::sync::Arc;
//!
//! let service = EnvApiService::new(ApiConfig::default(), Arc::new(ProcessEnvironment))?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod routes;
pub mod service;
pub mod telemetry;

// Re-exports for public API
pub use adapters::{ProcessEnvironment, StaticEnvironment};
pub use domain::config::{ApiConfig, ConfigError, ExposureConfig, ExposurePolicy};
pub use domain::error::{ApiError, ApiResult, EnvReadError, ServiceError};
pub use domain::exposure::apply_policy;
pub use middleware::ApiMetrics;
pub use ports::EnvironmentSource;
pub use service::{EnvApiService, ShutdownHandle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

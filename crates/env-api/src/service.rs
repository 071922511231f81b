//! Env API service: router construction and server lifecycle.

use crate::domain::config::ApiConfig;
use crate::domain::error::ServiceError;
use crate::middleware::{ApiMetrics, MiddlewareStack};
use crate::ports::EnvironmentSource;
use crate::routes::{self, AppState};
use axum::{routing::get, Router};
use env_types::ENV_ENDPOINT;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tracing::info;

/// Env API service state
pub struct EnvApiService {
    config: ApiConfig,
    source: Arc<dyn EnvironmentSource>,
    metrics: Arc<ApiMetrics>,
    shutdown: Arc<Notify>,
}

impl EnvApiService {
    /// Create a new service over the given environment source
    pub fn new(
        config: ApiConfig,
        source: Arc<dyn EnvironmentSource>,
    ) -> Result<Self, ServiceError> {
        config.validate()?;

        Ok(Self {
            config,
            source,
            metrics: Arc::new(ApiMetrics::new()),
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<ApiMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Build the HTTP router with the full middleware stack
    pub fn router(&self) -> Router {
        let state = AppState {
            exposure: Arc::new(self.config.exposure.clone()),
            source: Arc::clone(&self.source),
            metrics: Arc::clone(&self.metrics),
        };

        let stack = MiddlewareStack::from_config(&self.config);
        let middleware = ServiceBuilder::new()
            .layer(stack.tracing)
            .layer(stack.cors)
            .layer(stack.timeout);

        Router::new()
            .route("/", get(routes::index))
            .route(ENV_ENDPOINT, get(routes::get_env))
            .route("/health", get(routes::health_check))
            .route("/metrics", get(routes::metrics))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address and serve until shutdown
    pub async fn start(&self) -> Result<(), ServiceError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServiceError::Bind { addr, source })?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener until shutdown
    pub async fn serve(&self, listener: TcpListener) -> Result<(), ServiceError> {
        let addr: SocketAddr = listener.local_addr()?;
        info!(
            addr = %addr,
            policy = %self.config.exposure.policy,
            "Starting env API server"
        );

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
                info!("Received shutdown signal");
            })
            .await?;

        info!("Env API server stopped");
        Ok(())
    }

    /// Handle that stops the server from another task
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            notify: Arc::clone(&self.shutdown),
        }
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&self) {
        self.shutdown_handle().shutdown();
    }
}

/// Cloneable trigger for graceful shutdown.
#[derive(Clone)]
pub struct ShutdownHandle {
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    /// Stop the server. Takes effect even if called before serving starts.
    pub fn shutdown(&self) {
        self.notify.notify_one();
    }
}

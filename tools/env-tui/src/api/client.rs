//! Client for `GET /api/env`.

use std::time::Duration;

use env_types::{EnvResponse, ENV_ENDPOINT};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when fetching the environment.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Env API client.
#[derive(Debug, Clone)]
pub struct EnvApiClient {
    client: Client,
    base_url: String,
}

impl EnvApiClient {
    /// Create a client for the server at `base_url`. Without a timeout a hung
    /// server keeps the request open indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the environment endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, ENV_ENDPOINT)
    }

    /// Fetch a snapshot. The body is decoded whatever the HTTP status, since
    /// failures arrive as a structured `success: false` response.
    pub async fn fetch_env(&self) -> Result<EnvResponse, ClientError> {
        let url = self.endpoint_url();

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                ClientError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "Fetched environment");

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use env_types::EnvMap;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_endpoint_url() {
        let client = EnvApiClient::new("http://localhost:3000/", None).unwrap();
        assert_eq!(client.endpoint_url(), "http://localhost:3000/api/env");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let router = Router::new().route(
            "/api/env",
            get(|| async {
                let mut vars = EnvMap::new();
                vars.insert("NODE_ENV".to_string(), "test".to_string());
                Json(EnvResponse::success(vars))
            }),
        );
        let url = spawn_server(router).await;

        let response = EnvApiClient::new(url, None).unwrap().fetch_env().await.unwrap();
        assert!(response.success);
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_fetch_decodes_error_body() {
        let router = Router::new().route(
            "/api/env",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(EnvResponse::fetch_failed()),
                )
            }),
        );
        let url = spawn_server(router).await;

        let response = EnvApiClient::new(url, None).unwrap().fetch_env().await.unwrap();
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Failed to fetch environment variables")
        );
    }

    #[tokio::test]
    async fn test_fetch_non_json() {
        let router = Router::new().route("/api/env", get(|| async { "<html>oops</html>" }));
        let url = spawn_server(router).await;

        let result = EnvApiClient::new(url, None).unwrap().fetch_env().await;
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = EnvApiClient::new(format!("http://{}", addr), None).unwrap();
        let err = client.fetch_env().await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
        assert!(err.to_string().contains("Cannot connect to"));
    }
}

//! Running server fixture shared by the integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use env_api::{
    ApiConfig, EnvApiService, EnvReadError, EnvironmentSource, ExposurePolicy, ShutdownHandle,
    StaticEnvironment,
};
use env_types::EnvMap;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Source that always fails to read.
pub struct FailingEnvironment;

impl EnvironmentSource for FailingEnvironment {
    fn read(&self) -> Result<EnvMap, EnvReadError> {
        Err(EnvReadError::Unavailable("simulated read failure".to_string()))
    }
}

/// A server bound to `127.0.0.1:0`, stopped on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: ShutdownHandle,
    task: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start(config: ApiConfig, source: Arc<dyn EnvironmentSource>) -> Self {
        let service = EnvApiService::new(config, source).expect("valid config");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let shutdown = service.shutdown_handle();

        let task = tokio::spawn(async move {
            service.serve(listener).await.expect("server runs");
        });

        Self {
            addr,
            shutdown,
            task: Some(task),
        }
    }

    pub async fn with_policy<I, K, V>(policy: ExposurePolicy, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = ApiConfig::default();
        config.exposure.policy = policy;
        Self::start(config, Arc::new(StaticEnvironment::from_pairs(vars))).await
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the server and wait for it to exit.
    pub async fn stop(mut self) {
        self.shutdown.shutdown();
        if let Some(task) = self.task.take() {
            task.await.expect("server task");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.shutdown();
    }
}

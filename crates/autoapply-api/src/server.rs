//! Façade server implementation.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::routes::create_router;
use crate::state::AppState;

/// Façade server configuration.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub host: String,
    pub port: u16,
}

impl ApiServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// The façade server.
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: ApiServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Start the server and serve until the process exits.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Start the server and stop accepting connections once `shutdown` resolves.
    /// In-flight requests are drained before returning.
    pub async fn run_with_shutdown<F>(&self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());

        // Host names such as `localhost` are resolved here.
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;

        info!("AutoApply API listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("AutoApply API stopped");
        Ok(())
    }
}

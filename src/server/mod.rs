// Crisis Support - HTTP server module
// Thin transport around the crisis analyzer

mod handlers;

pub use handlers::{create_router, health_check, metrics_endpoint, ApiError};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::crisis::CrisisAnalyzer;
use crate::metrics::ServiceMetrics;

/// Shared state behind every request
pub struct CrisisServer {
    /// Validated analyzer (read-only after startup)
    analyzer: Arc<CrisisAnalyzer>,
    metrics: ServiceMetrics,
    config: ServerConfig,
    started_at: Instant,
}

impl CrisisServer {
    pub fn new(config: ServerConfig, analyzer: CrisisAnalyzer) -> Result<Self> {
        Ok(Self {
            analyzer: Arc::new(analyzer),
            metrics: ServiceMetrics::new()?,
            config,
            started_at: Instant::now(),
        })
    }

    /// Build the full application with tracing and CORS layers
    pub fn into_app(self) -> axum::Router {
        create_router(Arc::new(self))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.config.bind_address))?;

        let app = self.into_app();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!(crate::errors::bind_error(&addr.to_string(), e)))?;

        tracing::info!("Starting crisis support server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    pub fn analyzer(&self) -> &Arc<CrisisAnalyzer> {
        &self.analyzer
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

//! Travel document HTTP server.
//!
//! Serves the document API, backed by `PostgreSQL` when `DATABASE_URL` is set
//! and by an in-memory store otherwise.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

mod config;

use anyhow::Context;
use axum::{Router, routing::get};
use config::{Config, DEFAULT_LOG_FILTER};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use travel_docs_core::environment::SystemClock;
use travel_docs_core::{DocumentStore, InMemoryDocumentStore};
use travel_docs_postgres::PostgresDocumentStore;
use travel_docs_web::{AppState, build_router, metrics::register_business_metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        address = %config.bind_address(),
        persistent = config.database_url.is_some(),
        "Starting travel document server"
    );

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    register_business_metrics();
    spawn_metrics_server(config.metrics_address(), prometheus).await?;

    let store = build_store(&config).await?;
    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    info!(address = %config.bind_address(), "Server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|requested| *requested).await;
        tokio::time::sleep(config.shutdown_timeout).await;
    };

    tokio::select! {
        result = server => result.context("Server error")?,
        () = drain_deadline => warn!("Shutdown timeout elapsed, dropping open connections"),
    }

    info!("Server stopped");
    Ok(())
}

/// `PostgreSQL` when configured, in-memory otherwise.
async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresDocumentStore::new(url, config.database_max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            store
                .ensure_schema()
                .await
                .context("Failed to prepare documents table")?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL not set, documents are kept in memory only");
            Ok(Arc::new(InMemoryDocumentStore::new(Arc::new(SystemClock))))
        }
    }
}

/// Serve `GET /metrics` on its own listener.
async fn spawn_metrics_server(address: String, handle: PrometheusHandle) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind metrics listener {address}"))?;

    let app = Router::new().route("/metrics", get(move || std::future::ready(handle.render())));

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            error!(error = %err, "Metrics server failed");
        }
    });

    info!(address = %address, "Metrics available at /metrics");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

// Library root module for quote-gateway
// This file defines the public API and module structure and wires the
// startup sequence: validate config, verify the node network, then serve
//
// Numan Thabit 2025 Nov

pub mod api;
pub mod chain;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod quoter;
pub mod routing;
pub mod transport;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::StartupError;
use crate::quoter::Quoter;
use crate::routing::{HttpRoutingEngine, RoutePolicy};
use crate::transport::JsonRpc;

/// Everything that must succeed before the listener binds. Any error here
/// is fatal.
pub async fn bootstrap(config: &AppConfig) -> Result<Arc<Quoter>, StartupError> {
    let node_url = config.node_url()?;
    info!(node = %node_url, "using node url");
    let router_url = config.router_url()?;

    let rpc = JsonRpc::new(node_url.as_str());
    chain::ensure_chain(&rpc, chain::MAINNET_CHAIN_ID).await?;

    let engine = Arc::new(HttpRoutingEngine::new(router_url.as_str()));
    info!(router = %engine.endpoint(), "routing engine configured");

    let quoter = Quoter::new(engine, Arc::new(RoutePolicy::default()))
        .with_timeout(config.quote_timeout());
    Ok(Arc::new(quoter))
}

pub async fn run(config: AppConfig) -> Result<()> {
    let quoter = bootstrap(&config).await.context("startup checks")?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("bind {}:{}", config.host, config.port))?;
    info!(host = %config.host, port = config.port, "listening");

    api::serve(listener, quoter).await.context("HTTP server")
}

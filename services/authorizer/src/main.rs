//! Textura authorizer HTTP service entry point.
//!
//! # Purpose
//! Loads configuration, initializes observability, and serves the decision
//! API until interrupted.
use anyhow::Context;
use authorizer::app::{AppState, build_router};
use authorizer::{config, observability};
use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AuthorizerConfig::from_env_or_yaml().context("authorizer config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::AuthorizerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::default();
    let metrics_handle = observability::init_observability(&state.service_name);
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);
    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "authorizer listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

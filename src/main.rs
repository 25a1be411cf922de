mod config;
mod error;
mod handlers;
mod hubspot;
mod models;
mod rate_limiter;
mod routes;
mod service;
mod state;
#[cfg(test)]
mod test_support;

use std::{sync::Arc, time::Duration};

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, rate_limiter::RateLimiter, routes::router, service::HubSpotService,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = Arc::new(Config::from_env()?);
    let hubspot = Arc::new(HubSpotService::new(cfg.hubspot.clone())?);
    let rate_limiter = Arc::new(RateLimiter::new(
        cfg.rate_limit_max_calls,
        Duration::from_secs(cfg.rate_limit_window_secs),
    ));

    let state = AppState {
        cfg: cfg.clone(),
        hubspot,
        rate_limiter,
    };
    let app = router(state)?;

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    info!(
        "listening on {} (rate limit {} calls / {}s)",
        cfg.bind_addr, cfg.rate_limit_max_calls, cfg.rate_limit_window_secs
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

//! Helpers shared by the unit tests: a fake HubSpot served on a loopback port.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HubSpotConfig;

/// Serves `upstream` on an ephemeral port and returns its base URL.
pub async fn spawn_upstream(upstream: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn hubspot_config(base_url: &str) -> HubSpotConfig {
    HubSpotConfig {
        api_base_url: base_url.to_string(),
        authorization_url: "https://example.com/auth".to_string(),
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_url: "http://localhost:8080/callback".to_string(),
        timeout_ms: 5_000,
    }
}

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{authenticate, authorization_url, create_contact, health, process_contact},
    rate_limiter,
    state::AppState,
};

pub fn router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.cfg)?;

    // One limiter guards all relay routes; health checks stay outside it.
    let relay = Router::new()
        .route("/get-authorization-url", get(authorization_url))
        .route("/hubspot-authentication/:code", get(authenticate))
        .route("/create-contact", post(create_contact))
        .route("/process-contact", post(process_contact))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limiter::enforce,
        ));

    Ok(Router::new()
        .route("/health", get(health))
        .merge(relay)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

fn cors_layer(cfg: &Config) -> anyhow::Result<CorsLayer> {
    let layer = if cfg.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = cfg
            .cors_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };
    Ok(layer)
}

use std::sync::Arc;

use crate::{config::Config, rate_limiter::RateLimiter, service::HubSpotService};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub hubspot: Arc<HubSpotService>,
    pub rate_limiter: Arc<RateLimiter>,
}

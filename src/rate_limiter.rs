use std::time::Duration;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::{sync::Mutex, time::Instant};
use tracing::warn;

use crate::{models::RateLimitFallback, state::AppState};

pub const FALLBACK_MESSAGE: &str = "Rate limit was reach. Wait 10 seconds to try again.";

/// Fixed-window call budget shared by every guarded route.
pub struct RateLimiter {
    max_calls: u32,
    window: Duration,
    inner: Mutex<Window>,
}

struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_calls: u32, window: Duration) -> Self {
        Self {
            max_calls,
            window,
            inner: Mutex::new(Window {
                started: Instant::now(),
                count: 0,
            }),
        }
    }

    pub async fn allow(&self) -> bool {
        if self.max_calls == 0 {
            return true;
        }

        let mut window = self.inner.lock().await;
        let now = Instant::now();
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count >= self.max_calls {
            return false;
        }

        window.count += 1;
        true
    }
}

pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.rate_limiter.allow().await {
        warn!(path = %req.uri().path(), "rate limit exceeded");
        return fallback();
    }
    next.run(req).await
}

fn fallback() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(RateLimitFallback {
            message: FALLBACK_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;

use crate::application::ports::Clock;
use crate::presentation::handlers::ErrorResponse;

const WINDOW: Duration = Duration::from_secs(60);
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed one-minute request window per client, for a single route.
pub struct RouteRateLimiter {
    per_minute: u32,
    clock: Arc<dyn Clock>,
    trust_forwarded_for: bool,
    windows: Mutex<HashMap<String, Window>>,
}

impl RouteRateLimiter {
    pub fn new(per_minute: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            per_minute,
            clock,
            trust_forwarded_for: false,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Keys clients on the first `X-Forwarded-For` hop. Only safe behind a proxy that sets it.
    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    pub fn per_minute(&self) -> u32 {
        self.per_minute
    }

    /// Counts one request for `client`; false once the window is full.
    pub fn check(&self, client: &str) -> bool {
        let mut windows = self.windows.lock();
        let now = self.clock.now();

        if windows.len() >= PRUNE_THRESHOLD {
            windows.retain(|_, w| now.saturating_duration_since(w.started_at) < WINDOW);
        }

        let window = windows.entry(client.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.saturating_duration_since(window.started_at) >= WINDOW {
            *window = Window {
                started_at: now,
                count: 0,
            };
        }

        if window.count >= self.per_minute {
            return false;
        }
        window.count += 1;
        true
    }
}

fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .filter(|_| trust_forwarded_for)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RouteRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request, limiter.trust_forwarded_for);

    if !limiter.check(&client) {
        tracing::warn!(
            client = %client,
            path = %request.uri().path(),
            limit = limiter.per_minute(),
            "Route rate limit exceeded"
        );
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(format!(
                "Rate limit exceeded: {} per 1 minute",
                limiter.per_minute()
            ))),
        )
            .into_response();
    }

    next.run(request).await
}

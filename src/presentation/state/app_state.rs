use std::sync::Arc;

use crate::application::services::{ChatService, IngestionService};
use crate::presentation::middleware::RouteRateLimiter;

/// Per-route request limiters, each keyed by client.
#[derive(Clone)]
pub struct RouteLimiters {
    pub health: Arc<RouteRateLimiter>,
    pub upload: Arc<RouteRateLimiter>,
    pub chat: Arc<RouteRateLimiter>,
}

#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<IngestionService>,
    pub chat_service: Arc<ChatService>,
    pub route_limiters: RouteLimiters,
}

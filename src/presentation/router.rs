use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, health_handler, not_found_handler, upload_pdf_handler,
};
use crate::presentation::middleware::rate_limit_middleware;
use crate::presentation::state::AppState;

const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.ingestion_service.limits().max_pdf_size_bytes + MULTIPART_OVERHEAD_BYTES;
    let limiters = state.route_limiters.clone();

    Router::new()
        .route(
            "/health",
            get(health_handler).layer(middleware::from_fn_with_state(
                limiters.health,
                rate_limit_middleware,
            )),
        )
        .route(
            "/v1/pdf",
            post(upload_pdf_handler).layer(middleware::from_fn_with_state(
                limiters.upload,
                rate_limit_middleware,
            )),
        )
        .route(
            "/v1/chat/{pdf_id}",
            post(chat_handler).layer(middleware::from_fn_with_state(
                limiters.chat,
                rate_limit_middleware,
            )),
        )
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

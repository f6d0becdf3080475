use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pdfchat::application::ports::Clock;
use pdfchat::application::services::{
    ChatService, IngestionLimits, IngestionService, LlmGateway, TextNormalizer, TokenBucket,
};
use pdfchat::infrastructure::clock::SystemClock;
use pdfchat::infrastructure::llm::GeminiClient;
use pdfchat::infrastructure::observability::{TracingConfig, init_tracing};
use pdfchat::infrastructure::persistence::DocumentRepositoryFactory;
use pdfchat::infrastructure::storage::LocalUploadStore;
use pdfchat::infrastructure::text_processing::{LopdfParser, UnicodeWordTokenizer};
use pdfchat::presentation::middleware::RouteRateLimiter;
use pdfchat::presentation::{AppState, RouteLimiters, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("Failed to load configuration")?;

    let _log_guard = init_tracing(&TracingConfig {
        environment: settings.environment.to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.json,
        directory: settings.logging.directory.clone(),
    });

    let document_repository = DocumentRepositoryFactory::create(&settings.database)
        .await
        .context("Failed to initialize document store")?;

    let upload_store = Arc::new(
        LocalUploadStore::new(settings.upload.directory.clone())
            .context("Failed to prepare upload directory")?,
    );

    let llm_client = GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
        settings.llm.model.clone(),
        settings.llm.request_timeout(),
    )
    .context("Failed to build LLM client")?;
    if !llm_client.has_api_key() {
        tracing::warn!("No LLM API key configured; chat requests will fail");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_bucket = Arc::new(TokenBucket::new(
        settings.llm.tokens_per_minute,
        settings.llm.tokens_per_day,
        Arc::clone(&clock),
    ));

    let ingestion_service = Arc::new(IngestionService::new(
        upload_store,
        Arc::new(LopdfParser::new()),
        Arc::new(TextNormalizer::new(Arc::new(UnicodeWordTokenizer::new()))),
        Arc::clone(&document_repository),
        IngestionLimits {
            max_pdf_size_bytes: settings.upload.max_pdf_size_bytes,
            max_char_length: settings.upload.max_char_length,
        },
    ));

    let gateway = Arc::new(LlmGateway::new(Arc::new(llm_client), token_bucket));
    let chat_service = Arc::new(ChatService::new(document_repository, gateway));

    let limits = settings.server.rate_limits;
    let trust_forwarded_for = settings.server.trust_forwarded_for;
    let route_limiter = |per_minute: u32| {
        Arc::new(
            RouteRateLimiter::new(per_minute, Arc::clone(&clock))
                .trusting_forwarded_for(trust_forwarded_for),
        )
    };
    let state = AppState {
        ingestion_service,
        chat_service,
        route_limiters: RouteLimiters {
            health: route_limiter(limits.health_per_minute),
            upload: route_limiter(limits.upload_per_minute),
            chat: route_limiter(limits.chat_per_minute),
        },
    };

    let router = create_router(state);

    let addr = settings.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, environment = %settings.environment, "Listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

use std::sync::Arc;

use pdfchat::application::ports::LlmClientError;
use pdfchat::application::services::{GatewayError, LlmGateway, TokenBucket};
use pdfchat::infrastructure::clock::ManualClock;

use crate::helpers::doubles::StubLlmClient;

fn gateway(client: Arc<StubLlmClient>, tokens_per_day: u32) -> (LlmGateway, Arc<TokenBucket>) {
    let bucket = Arc::new(TokenBucket::new(
        100,
        tokens_per_day,
        Arc::new(ManualClock::new()),
    ));
    (LlmGateway::new(client, bucket.clone()), bucket)
}

#[tokio::test]
async fn given_answer_when_asking_then_trimmed_text_returned_and_words_charged() {
    let client = Arc::new(StubLlmClient::answering("  The sky is blue.  \n"));
    let (gateway, bucket) = gateway(client.clone(), 1000);

    let answer = gateway.answer("the sky is blue", "What colour?").await.unwrap();

    assert_eq!(answer, "The sky is blue.");
    assert_eq!(bucket.available(), 996.0);
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("PDF Content: the sky is blue"));
    assert!(prompts[0].contains("User Question: What colour?"));
}

#[tokio::test]
async fn given_provider_token_count_when_asking_then_exact_count_is_charged() {
    let client = Arc::new(StubLlmClient::answering_with_usage("short answer", 25));
    let (gateway, bucket) = gateway(client, 1000);

    gateway.answer("text", "question").await.unwrap();

    assert_eq!(bucket.available(), 975.0);
}

#[tokio::test]
async fn given_exhausted_bucket_when_asking_then_rate_limited() {
    let client = Arc::new(StubLlmClient::answering("one two three four five"));
    let (gateway, bucket) = gateway(client, 4);

    let result = gateway.answer("text", "question").await;

    assert!(matches!(result, Err(GatewayError::RateLimited)));
    assert_eq!(result.unwrap_err().to_string(), "Token limit exceeded");
    assert_eq!(bucket.available(), 4.0);
}

#[tokio::test]
async fn given_missing_api_key_when_asking_then_configuration_error() {
    let client = Arc::new(StubLlmClient::failing(|| LlmClientError::MissingApiKey));
    let (gateway, bucket) = gateway(client, 1000);

    let result = gateway.answer("text", "question").await;

    assert!(matches!(result, Err(GatewayError::Configuration(_))));
    assert_eq!(bucket.available(), 1000.0);
}

#[tokio::test]
async fn given_upstream_failure_when_asking_then_error_is_propagated_without_charge() {
    let client = Arc::new(StubLlmClient::failing(|| {
        LlmClientError::ApiRequestFailed("HTTP 503".to_string())
    }));
    let (gateway, bucket) = gateway(client, 1000);

    let result = gateway.answer("text", "question").await;

    match result {
        Err(GatewayError::Upstream(LlmClientError::ApiRequestFailed(message))) => {
            assert!(message.contains("503"));
        }
        other => panic!("expected upstream failure, got {other:?}"),
    }
    assert_eq!(bucket.available(), 1000.0);
}

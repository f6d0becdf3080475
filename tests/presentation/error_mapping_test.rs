use axum::http::StatusCode;
use pdfchat::application::ports::{LlmClientError, RepositoryError};
use pdfchat::application::services::{ChatError, GatewayError, IngestionError};
use pdfchat::presentation::handlers::ApiError;

#[test]
fn given_validation_failures_when_mapped_then_bad_request() {
    for error in [
        IngestionError::InvalidFileType,
        IngestionError::NoPages,
        IngestionError::NoText,
        IngestionError::TextTooLong {
            length: 10,
            max: 5,
        },
    ] {
        assert_eq!(ApiError::from(error).status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn given_dependency_failure_during_ingestion_when_mapped_then_server_error() {
    let error = IngestionError::Repository(RepositoryError::QueryFailed("down".to_string()));
    assert_eq!(
        ApiError::from(error).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn given_chat_failures_when_mapped_then_statuses_follow_the_cause() {
    let cases = [
        (ChatError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (ChatError::MissingMessage, StatusCode::BAD_REQUEST),
        (ChatError::EmptyDocumentText, StatusCode::BAD_REQUEST),
        (
            ChatError::Gateway(GatewayError::RateLimited),
            StatusCode::TOO_MANY_REQUESTS,
        ),
        (
            ChatError::Gateway(GatewayError::Upstream(LlmClientError::Blocked(
                "safety".to_string(),
            ))),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(ApiError::from(error).status(), expected);
    }
}

use pdfchat::application::ports::DocumentRepository;
use pdfchat::domain::{DocumentId, DocumentUpdate, NewDocument};
use pdfchat::infrastructure::persistence::InMemoryDocumentRepository;

fn new_document(text: &str) -> NewDocument {
    NewDocument {
        filename: "doc.pdf".to_string(),
        original_filename: "doc.pdf".to_string(),
        file_path: "uploads/doc.pdf".to_string(),
        page_count: 1,
        size_kb: 1.5,
        extracted_text: text.to_string(),
    }
}

#[tokio::test]
async fn given_created_document_when_fetching_then_record_is_returned() {
    let repository = InMemoryDocumentRepository::new();

    let id = repository.create(&new_document("hello")).await.unwrap();
    let record = repository.get_by_id(id).await.unwrap().unwrap();

    assert_eq!(record.id, id);
    assert_eq!(record.extracted_text, "hello");
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_none() {
    let repository = InMemoryDocumentRepository::new();

    assert!(repository.get_by_id(DocumentId::new()).await.unwrap().is_none());
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn given_changed_field_when_updating_then_reports_modified_and_keeps_others() {
    let repository = InMemoryDocumentRepository::new();
    let id = repository.create(&new_document("old")).await.unwrap();

    let modified = repository
        .update(
            id,
            &DocumentUpdate {
                extracted_text: Some("new".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let record = repository.get_by_id(id).await.unwrap().unwrap();
    assert!(modified);
    assert_eq!(record.extracted_text, "new");
    assert_eq!(record.size_kb, 1.5);
}

#[tokio::test]
async fn given_identical_values_when_updating_then_reports_unmodified() {
    let repository = InMemoryDocumentRepository::new();
    let id = repository.create(&new_document("same")).await.unwrap();

    let modified = repository
        .update(
            id,
            &DocumentUpdate {
                extracted_text: Some("same".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!modified);
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_reports_unmodified() {
    let repository = InMemoryDocumentRepository::new();

    let modified = repository
        .update(
            DocumentId::new(),
            &DocumentUpdate {
                page_count: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!modified);
}

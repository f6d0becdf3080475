use pdfchat::domain::DocumentId;
use uuid::Uuid;

#[test]
fn given_two_new_ids_when_created_then_they_differ() {
    assert_ne!(DocumentId::new(), DocumentId::new());
}

#[test]
fn given_id_when_displayed_and_parsed_then_same_id() {
    let id = DocumentId::new();
    let parsed: DocumentId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn given_padded_uuid_when_parsing_then_whitespace_is_ignored() {
    let uuid = Uuid::new_v4();
    let parsed: DocumentId = format!("  {uuid} ").parse().unwrap();
    assert_eq!(parsed.as_uuid(), uuid);
}

#[test]
fn given_malformed_text_when_parsing_then_error_mentions_input() {
    let error = "abc".parse::<DocumentId>().unwrap_err();
    assert!(error.contains("abc"));
}

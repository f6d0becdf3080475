use pdfchat::application::ports::{TokenKind, Tokenizer};
use pdfchat::infrastructure::text_processing::UnicodeWordTokenizer;

fn content_tokens(text: &str) -> Vec<(&str, TokenKind)> {
    UnicodeWordTokenizer::new()
        .tokenize(text)
        .into_iter()
        .filter(|t| t.kind.is_content())
        .map(|t| (t.text, t.kind))
        .collect()
}

#[test]
fn given_sentence_when_tokenizing_then_words_and_numbers_are_classified() {
    assert_eq!(
        content_tokens("Rust 2024 rocks!"),
        vec![
            ("Rust", TokenKind::Word),
            ("2024", TokenKind::Number),
            ("rocks", TokenKind::Word),
        ]
    );
}

#[test]
fn given_contraction_when_tokenizing_then_it_stays_one_word() {
    assert_eq!(content_tokens("don't stop"), vec![
        ("don't", TokenKind::Word),
        ("stop", TokenKind::Word),
    ]);
}

#[test]
fn given_decimal_when_tokenizing_then_it_is_one_number() {
    assert_eq!(content_tokens("pi is 3.14"), vec![
        ("pi", TokenKind::Word),
        ("is", TokenKind::Word),
        ("3.14", TokenKind::Number),
    ]);
}

#[test]
fn given_text_when_tokenizing_then_segments_cover_input_exactly() {
    let text = "Hello, world!  ok?";
    let joined: String = UnicodeWordTokenizer::new()
        .tokenize(text)
        .iter()
        .map(|t| t.text)
        .collect();

    assert_eq!(joined, text);
}

#[test]
fn given_punctuation_and_spaces_when_tokenizing_then_they_are_not_content() {
    let tokens = UnicodeWordTokenizer::new().tokenize(", !");

    assert!(tokens.iter().all(|t| !t.kind.is_content()));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Whitespace));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Punctuation));
}

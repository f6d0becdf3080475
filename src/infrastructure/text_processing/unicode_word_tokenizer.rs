use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{Token, TokenKind, Tokenizer};

/// Tokenizer following Unicode word boundaries (UAX #29), so contractions
/// such as `don't` stay one token.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        text.split_word_bounds()
            .map(|segment| Token {
                text: segment,
                kind: classify(segment),
            })
            .collect()
    }
}

fn classify(segment: &str) -> TokenKind {
    if segment.chars().all(char::is_whitespace) {
        TokenKind::Whitespace
    } else if !segment.chars().any(char::is_alphanumeric) {
        TokenKind::Punctuation
    } else if segment
        .chars()
        .all(|c| c.is_numeric() || matches!(c, '.' | ',' | '\''))
    {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

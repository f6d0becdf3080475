/// Splits text into classified tokens for normalization.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Whitespace,
}

impl TokenKind {
    pub fn is_content(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Number)
    }
}

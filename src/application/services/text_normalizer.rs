use std::sync::{Arc, LazyLock};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::application::ports::Tokenizer;

static COMBINING_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{M}+").unwrap());

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]").unwrap());

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s']|\p{Join_Control}").unwrap());

/// Turns raw extracted text into a single-line, lowercase token sequence.
///
/// Accents are folded to their base letters, punctuation other than
/// apostrophes is dropped, and tokens are re-joined with single spaces.
pub struct TextNormalizer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl TextNormalizer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let decomposed: String = raw.nfkd().collect();
        let folded = COMBINING_MARKS.replace_all(&decomposed, "");
        let single_line = LINE_BREAKS.replace_all(&folded, " ");
        let cleaned = DISALLOWED.replace_all(&single_line, " ");

        self.tokenizer
            .tokenize(&cleaned)
            .into_iter()
            .filter(|token| token.kind.is_content())
            .map(|token| token.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

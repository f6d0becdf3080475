/// Approximates the token cost of `text` as its whitespace-delimited word count.
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

mod lopdf_parser;
mod unicode_word_tokenizer;

pub use lopdf_parser::LopdfParser;
pub use unicode_word_tokenizer::UnicodeWordTokenizer;

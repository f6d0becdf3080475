mod lopdf_parser_test;
mod unicode_word_tokenizer_test;

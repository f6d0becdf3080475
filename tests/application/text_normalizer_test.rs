use std::sync::Arc;

use pdfchat::application::services::TextNormalizer;
use pdfchat::infrastructure::text_processing::UnicodeWordTokenizer;

fn normalizer() -> TextNormalizer {
    TextNormalizer::new(Arc::new(UnicodeWordTokenizer::new()))
}

#[test]
fn given_basic_sentence_when_normalizing_then_punctuation_removed_and_lowercased() {
    assert_eq!(
        normalizer().normalize("Hello, world! This is a test."),
        "hello world this is a test"
    );
}

#[test]
fn given_special_characters_when_normalizing_then_they_are_dropped() {
    assert_eq!(
        normalizer().normalize("This has some special characters: @#$%^&*()_+"),
        "this has some special characters"
    );
}

#[test]
fn given_accented_letters_when_normalizing_then_folded_to_base_letters() {
    assert_eq!(
        normalizer().normalize("This has some unicode characters: é è ñ ü"),
        "this has some unicode characters e e n u"
    );
}

#[test]
fn given_line_breaks_when_normalizing_then_output_is_single_line() {
    assert_eq!(
        normalizer().normalize("This has\nnewlines\nand\rcarriage returns."),
        "this has newlines and carriage returns"
    );
}

#[test]
fn given_numbers_when_normalizing_then_they_are_preserved() {
    assert_eq!(
        normalizer().normalize("Chapter 12 has 3 sections, 2024 edition."),
        "chapter 12 has 3 sections 2024 edition"
    );
}

#[test]
fn given_contraction_when_normalizing_then_apostrophe_is_kept() {
    assert_eq!(normalizer().normalize("Don't PANIC"), "don't panic");
}

#[test]
fn given_ligature_when_normalizing_then_compatibility_decomposed() {
    assert_eq!(normalizer().normalize("ﬁnancial report"), "financial report");
}

#[test]
fn given_empty_or_symbol_only_text_when_normalizing_then_result_is_empty() {
    let normalizer = normalizer();
    assert_eq!(normalizer.normalize(""), "");
    assert_eq!(normalizer.normalize("  !!! ??? \n\t "), "");
}

#[test]
fn given_normalized_text_when_normalizing_again_then_unchanged() {
    let normalizer = normalizer();
    let once = normalizer.normalize("Ça va? Très BIEN, merci!\r\nÀ bientôt: 42 fois.");
    assert_eq!(normalizer.normalize(&once), once);
}

#[test]
fn given_any_text_when_normalizing_then_no_uppercase_or_double_spaces() {
    let output = normalizer().normalize("  Mixed   CASE\t\tinput -- with -- dashes  ");
    assert_eq!(output, output.to_lowercase());
    assert!(!output.contains("  "));
    assert_eq!(output, output.trim());
}

#[test]
fn given_zero_width_joiners_when_normalizing_then_they_split_words() {
    let normalizer = normalizer();
    assert_eq!(normalizer.normalize("a\u{200d}b"), "a b");
    assert_eq!(normalizer.normalize("non\u{200c}joiner"), "non joiner");
}

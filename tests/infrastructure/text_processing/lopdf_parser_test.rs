use pdfchat::application::ports::{PdfParser, PdfParserError};
use pdfchat::infrastructure::text_processing::LopdfParser;

use crate::helpers::pdf_fixtures::{
    hello_world_pdf, pdf_with_pages, pdf_with_undecodable_font,
};

#[tokio::test]
async fn given_single_page_pdf_when_parsing_then_page_text_is_extracted() {
    let parsed = LopdfParser::new().parse(&hello_world_pdf()).await.unwrap();

    assert_eq!(parsed.page_count(), 1);
    assert!(parsed.concatenated_text().contains("Hello World"));
}

#[tokio::test]
async fn given_multi_page_pdf_when_parsing_then_pages_keep_their_order() {
    let data = pdf_with_pages(&["First page", "Second page", "Third page"]);

    let parsed = LopdfParser::new().parse(&data).await.unwrap();

    assert_eq!(parsed.page_count(), 3);
    assert!(parsed.page_texts[0].contains("First"));
    assert!(parsed.page_texts[2].contains("Third"));
    let text = parsed.concatenated_text();
    assert!(text.find("First").unwrap() < text.find("Second").unwrap());
}

#[tokio::test]
async fn given_non_pdf_bytes_when_parsing_then_malformed() {
    let result = LopdfParser::new().parse(b"this is not a pdf").await;

    assert!(matches!(result, Err(PdfParserError::Malformed(_))));
}

#[tokio::test]
async fn given_page_with_undecodable_font_when_parsing_then_extraction_fails_naming_page() {
    let data = pdf_with_undecodable_font(&["Unreadable"]);

    let result = LopdfParser::new().parse(&data).await;

    match result {
        Err(PdfParserError::ExtractionFailed(message)) => assert!(message.starts_with("page 1:")),
        other => panic!("expected extraction failure, got {other:?}"),
    }
}

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fs;
use url::Url;

use crate::extractor::{ExtractError, extract_article, extract_pdf};
use crate::fetcher::types::{Charset, PageResponse};

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body_raw: Bytes::from(html.clone()),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}

#[test]
fn test_extract_article_with_metadata() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/article");
    let doc = extract_article(&response).unwrap();

    assert!(doc.text.contains("first paragraph"));
    assert!(doc.text.contains("second paragraph"));
    assert!(doc.title.as_deref().unwrap().contains("Sample Article"));
    assert_eq!(
        doc.authors,
        vec!["Jane Doe".to_string(), "John Smith".to_string()]
    );
    assert_eq!(
        doc.publish_date,
        Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    );
    // Relative og:image is resolved against the page URL.
    assert_eq!(
        doc.image_url.as_ref().map(|u| u.as_str()),
        Some("https://example.com/images/sample.jpg")
    );
}

#[test]
fn test_extract_article_without_metadata() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Plain Article</title></head><body><article><h1>Plain Article</h1><p>{}</p></article></body></html>"#,
        "A plain article with no declared metadata but plenty of body text to extract. ".repeat(10)
    );

    let response = create_test_response(html, "https://example.com/plain");
    let doc = extract_article(&response).unwrap();

    assert!(doc.text.contains("plenty of body text"));
    assert!(doc.authors.is_empty());
    assert!(doc.publish_date.is_none());
    assert!(doc.image_url.is_none());
}

#[test]
fn test_visual_only_page_has_no_text() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/gallery");
    let result = extract_article(&response);

    assert!(matches!(
        result,
        Err(ExtractError::NoExtractableText) | Err(ExtractError::Parse(_))
    ));
}

#[test]
fn test_extract_pdf_rejects_non_pdf_bytes() {
    let result = extract_pdf(b"<html><body>surprise, html</body></html>");
    assert!(matches!(result, Err(ExtractError::Parse(_))));
}

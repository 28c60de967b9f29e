pub mod language;
pub mod model;
pub mod pdf;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::IngestedDocument;

use thiserror::Error;

use crate::extractor::model::normalize_whitespace;
use crate::fetcher::types::PageResponse;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("no extractable text")]
    NoExtractableText,
}

/// Extract an article from a fetched page: main body text plus whatever
/// metadata the page declares (title, authors, publish date, top image).
pub fn extract_article(resp: &PageResponse) -> Result<IngestedDocument, ExtractError> {
    let mut doc = reader::extract(&resp.body_utf8, &resp.url_final)
        .ok_or_else(|| ExtractError::Parse("unable to locate article content".to_string()))?;
    doc.text = normalize_whitespace(&doc.text);
    if doc.text.trim().is_empty() {
        return Err(ExtractError::NoExtractableText);
    }
    Ok(doc)
}

/// Extract the text of a PDF, all pages concatenated in page order. PDFs
/// carry no article metadata we care about, so only text is populated.
pub fn extract_pdf(bytes: &[u8]) -> Result<IngestedDocument, ExtractError> {
    let text = normalize_whitespace(&pdf::extract_text(bytes)?);
    if text.trim().is_empty() {
        return Err(ExtractError::NoExtractableText);
    }
    Ok(IngestedDocument::from_text(text))
}

//! PDF text extraction for the research-paper path.

use crate::extractor::ExtractError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Cheap validity check on the byte stream before handing it to the parser.
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(PDF_MAGIC)
}

/// Extract text from a PDF held fully in memory. pdf-extract walks the pages
/// in order and concatenates their text.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if !is_pdf(bytes) {
        return Err(ExtractError::Parse(
            "byte stream is not a PDF document".to_string(),
        ));
    }
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))
}

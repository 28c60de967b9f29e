use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

/// A document produced by one of the ingestion paths, ready for
/// summarization. Metadata fields are best-effort and absent for raw text
/// and PDFs.
#[derive(Debug, Clone, Serialize)]
pub struct IngestedDocument {
    pub text: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub image_url: Option<Url>,
}

impl IngestedDocument {
    /// A document that is nothing but text, as the raw-text path produces.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            authors: Vec::new(),
            publish_date: None,
            image_url: None,
        }
    }
}

static SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

pub fn normalize_whitespace(text: &str) -> String {
    let text = text.trim();

    // Collapse runs of spaces/tabs, then squeeze blank-line runs to one
    // paragraph break.
    let spaced = SPACE_REGEX.replace_all(text, " ");
    NEWLINE_REGEX.replace_all(&spaced, "\n\n").to_string()
}

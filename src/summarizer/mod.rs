//! Summarization adapter.
//!
//! Wraps language detection plus a call to an external summarization
//! inference service behind a uniform text-in, summary-out trait.

pub mod http;

pub use http::HttpSummarizer;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Only the first this-many characters of the input are summarized. This is
/// a documented truncation of the adapter, not a configuration knob.
pub const MAX_INPUT_CHARS: usize = 1024;

/// Generation bounds for the produced summary, in tokens.
pub const SUMMARY_MIN_TOKENS: u32 = 50;
pub const SUMMARY_MAX_TOKENS: u32 = 150;

#[derive(Error, Debug)]
pub enum SummarizationError {
    #[error("invalid summarizer endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("summarization request failed: {0}")]
    Request(String),

    #[error("summarization backend returned http {0}")]
    Backend(reqwest::StatusCode),

    #[error("failed to decode summarizer response: {0}")]
    Decode(String),

    #[error("summarizer returned an empty summary")]
    EmptyCompletion,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Informational only; `None` when detection was skipped or unsure.
    pub detected_language: Option<String>,
    pub summary_text: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummarizerTrait {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizationError>;
}

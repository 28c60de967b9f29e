//! Content dispatch: routes a content-type tag plus a single input string to
//! one of the three ingestion paths (article, PDF, raw text).

pub mod dtos;
pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use utoipa::ToSchema;

use crate::auth::dtos::ErrorResponse;
use crate::extractor::{self, ExtractError, IngestedDocument};
use crate::fetcher::{self, FetchError};
use crate::summarizer::SummarizationError;

/// The user-selected kind of content behind the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContentType {
    Article,
    Newspaper,
    #[serde(rename = "Research Paper")]
    ResearchPaper,
    Text,
}

/// Everything that can go wrong between the submitted form and the rendered
/// summary. Each variant's display string is the user-visible message.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Please provide a valid URL or text.")]
    MissingInput,

    #[error("Invalid input. Please provide a valid URL or text.")]
    UnsupportedInput,

    #[error("failed to fetch content: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to parse content: {0}")]
    Parse(String),

    #[error(
        "The document appears to be primarily visual (e.g., images or videos) and does not contain extractable text. Summarization is not possible."
    )]
    NoExtractableText,

    #[error("Error in summarization: {0}")]
    Summarization(#[from] SummarizationError),
}

impl From<ExtractError> for ProcessError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Parse(msg) => Self::Parse(msg),
            ExtractError::NoExtractableText => Self::NoExtractableText,
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingInput | Self::UnsupportedInput => StatusCode::BAD_REQUEST,
            Self::Fetch(_) | Self::Summarization(_) => StatusCode::BAD_GATEWAY,
            Self::Parse(_) | Self::NoExtractableText => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Run the ingestion path selected by `content_type` and return the document
/// to summarize. Single-shot: no state survives between calls.
#[instrument(skip(raw_input))]
pub async fn ingest(
    content_type: ContentType,
    raw_input: &str,
) -> Result<IngestedDocument, ProcessError> {
    if raw_input.trim().is_empty() {
        return Err(ProcessError::MissingInput);
    }

    match content_type {
        ContentType::Article | ContentType::Newspaper => {
            let page = fetcher::fetch(raw_input.trim()).await?;
            Ok(extractor::extract_article(&page)?)
        }
        ContentType::ResearchPaper => {
            let url = raw_input.trim();
            if !url.to_lowercase().ends_with(".pdf") {
                return Err(ProcessError::UnsupportedInput);
            }
            let bytes = fetcher::fetch_document(url).await?;
            Ok(extractor::extract_pdf(&bytes)?)
        }
        // Raw text is passed through untouched.
        ContentType::Text => Ok(IngestedDocument::from_text(raw_input)),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dispatch::ContentType;
use crate::extractor::IngestedDocument;
use crate::summarizer::Summary;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub content_type: ContentType,
    pub input: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummarizeResponse {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub detected_language: Option<String>,
    pub summary: String,
}

impl SummarizeResponse {
    pub fn from_parts(doc: IngestedDocument, summary: Summary) -> Self {
        Self {
            title: doc.title,
            authors: doc.authors,
            publish_date: doc.publish_date,
            image_url: doc.image_url.map(|u| u.to_string()),
            detected_language: summary.detected_language,
            summary: summary.summary_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_spaced_content_type() {
        let request: SummarizeRequest = serde_json::from_str(
            r#"{"content_type": "Research Paper", "input": "https://example.com/x.pdf"}"#,
        )
        .unwrap();
        assert_eq!(request.content_type, ContentType::ResearchPaper);
        assert_eq!(request.input, "https://example.com/x.pdf");
    }

    #[test]
    fn test_response_from_parts() {
        let doc = IngestedDocument::from_text("body text");
        let summary = Summary {
            detected_language: Some("en".to_string()),
            summary_text: "short".to_string(),
        };
        let response = SummarizeResponse::from_parts(doc, summary);
        assert_eq!(response.summary, "short");
        assert_eq!(response.detected_language.as_deref(), Some("en"));
        assert!(response.title.is_none());
        assert!(response.image_url.is_none());
    }
}

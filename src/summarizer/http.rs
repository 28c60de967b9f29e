use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::extractor::language::detect_language;
use crate::summarizer::{
    MAX_INPUT_CHARS, SUMMARY_MAX_TOKENS, SUMMARY_MIN_TOKENS, SummarizationError, Summary,
    SummarizerTrait,
};

// Model inference is slow compared to page fetches.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Summarizer backed by an HTTP inference endpoint. The wire format is the
/// usual text-generation one: `{"inputs": ..., "parameters": {...}}` in,
/// `[{"summary_text": ...}]` out.
pub struct HttpSummarizer {
    endpoint: Url,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceCompletion {
    summary_text: String,
}

impl HttpSummarizer {
    pub fn new(endpoint: &str) -> Result<Self, SummarizationError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| SummarizationError::InvalidEndpoint(e.to_string()))?;
        let client = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizationError::Request(e.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl SummarizerTrait for HttpSummarizer {
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizationError> {
        // Best-effort language tag. An inconclusive detection must never
        // block the summary itself.
        let detected_language = detect_language(text);
        if detected_language.is_none() {
            debug!("language detection inconclusive, proceeding without a tag");
        }

        let excerpt: String = text.chars().take(MAX_INPUT_CHARS).collect();

        let request = InferenceRequest {
            inputs: &excerpt,
            parameters: InferenceParameters {
                min_length: SUMMARY_MIN_TOKENS,
                max_length: SUMMARY_MAX_TOKENS,
                // Deterministic generation: same input, same summary.
                do_sample: false,
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "summarization backend rejected the request");
            return Err(SummarizationError::Backend(status));
        }

        let completions: Vec<InferenceCompletion> = response
            .json()
            .await
            .map_err(|e| SummarizationError::Decode(e.to_string()))?;

        let summary_text = completions
            .into_iter()
            .next()
            .map(|c| c.summary_text)
            .unwrap_or_default()
            .trim()
            .to_string();

        if summary_text.is_empty() {
            return Err(SummarizationError::EmptyCompletion);
        }

        Ok(Summary {
            detected_language,
            summary_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    async fn summarizer_for(server: &MockServer) -> HttpSummarizer {
        HttpSummarizer::new(&format!("{}/summarize", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success_with_language() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_partial_json(json!({
                "parameters": {"min_length": 50, "max_length": 150, "do_sample": false}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"summary_text": "A short digest."}])),
            )
            .mount(&server)
            .await;

        let text = "This is a long English passage about the weather, written with \
                    enough words for the language detector to be confident about it.";
        let summary = summarizer_for(&server).await.summarize(text).await.unwrap();

        assert_eq!(summary.summary_text, "A short digest.");
        assert_eq!(summary.detected_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_detection_failure_does_not_block_summarization() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"summary_text": "Numbers, mostly."}])),
            )
            .mount(&server)
            .await;

        // Too short and too symbol-heavy for a confident detection.
        let summary = summarizer_for(&server)
            .await
            .summarize("42 17 99 3.14")
            .await
            .unwrap();

        assert_eq!(summary.detected_language, None);
        assert_eq!(summary.summary_text, "Numbers, mostly.");
    }

    #[tokio::test]
    async fn test_input_is_truncated_to_1024_chars() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(|req: &Request| {
                let body: serde_json::Value = match serde_json::from_slice(&req.body) {
                    Ok(body) => body,
                    Err(_) => return false,
                };
                body["inputs"]
                    .as_str()
                    .is_some_and(|inputs| inputs.chars().count() == 1024)
            })
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "Truncated."}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let long_text = "word ".repeat(2000);
        let summary = summarizer_for(&server)
            .await
            .summarize(&long_text)
            .await
            .unwrap();
        assert_eq!(summary.summary_text, "Truncated.");
    }

    #[tokio::test]
    async fn test_backend_error_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = summarizer_for(&server)
            .await
            .summarize("anything at all")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::Backend(status) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_empty_completion_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "   "}])),
            )
            .mount(&server)
            .await;

        let err = summarizer_for(&server)
            .await
            .summarize("anything at all")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_rejected() {
        let result = HttpSummarizer::new("not a url");
        assert!(matches!(result, Err(SummarizationError::InvalidEndpoint(_))));
    }
}

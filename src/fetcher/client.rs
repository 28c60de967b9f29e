use crate::fetcher::{decode::decode_response, errors::FetchError, types::PageResponse};
use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::instrument;

const MAX_PAGE_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const MAX_DOCUMENT_SIZE: u64 = 20 * 1024 * 1024; // 20MB, PDFs run larger than pages
const USER_AGENT: &str = "PrecisBot/0.1 (+https://precis.example.com)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to build HTTP client")
});

pub fn get_client() -> &'static Client {
    &HTTP_CLIENT
}

/// Fetch an HTML page and decode it to UTF-8.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let response = send(url, MAX_PAGE_SIZE).await?;

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    let content_type = headers
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    // The article path only understands HTML.
    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type.clone()));
    }

    let body_bytes = read_body(response, MAX_PAGE_SIZE).await?;

    decode_response(final_url, status, headers, body_bytes, &content_type)
}

/// Fetch a binary document (a PDF) as raw bytes. No content-type gate: the
/// extractor validates the byte stream itself.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_document(url: &str) -> Result<Bytes, FetchError> {
    let response = send(url, MAX_DOCUMENT_SIZE).await?;
    read_body(response, MAX_DOCUMENT_SIZE).await
}

async fn send(url: &str, max_size: u64) -> Result<Response, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > max_size
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    if !response.status().is_success() {
        return Err(FetchError::Http(response.status()));
    }

    Ok(response)
}

async fn read_body(response: Response, max_size: u64) -> Result<Bytes, FetchError> {
    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Check body size after download (in case Content-Length was missing)
    if body_bytes.len() as u64 > max_size {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    Ok(body_bytes)
}

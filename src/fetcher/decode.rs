//! Charset sniffing and UTF-8 decoding for fetched pages.
//!
//! Sniffing order: Content-Type header, then `<meta>` declarations in the
//! first 4KB, then chardetng's statistical guess.

use crate::fetcher::{
    errors::FetchError,
    types::{Charset, PageResponse},
};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::{StatusCode, header::HeaderMap};
use std::sync::LazyLock;
use url::Url;

const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // <meta charset="...">
        Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap(),
        // <meta http-equiv="Content-Type" content="...; charset=...">
        Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap(),
    ]
});

pub fn decode_response(
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let charset = sniff_charset(content_type, &body_bytes);
    let body_utf8 = to_utf8(&body_bytes, &charset)?;

    Ok(PageResponse {
        url_final,
        status,
        headers,
        body_raw: body_bytes,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    })
}

fn encoding_for_capture(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = re.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn sniff_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Content-Type header
    if let Some(encoding) = encoding_for_capture(&HEADER_CHARSET_REGEX, content_type) {
        return Charset::from_encoding(encoding);
    }

    // 2. <meta> declarations in the first 4KB
    let window = &body_bytes[..body_bytes.len().min(SNIFF_WINDOW)];
    let window_str = String::from_utf8_lossy(window);
    for re in META_CHARSET_REGEXES.iter() {
        if let Some(encoding) = encoding_for_capture(re, &window_str) {
            return Charset::from_encoding(encoding);
        }
    }

    // 3. Statistical detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn to_utf8(body_bytes: &[u8], charset: &Charset) -> Result<String, FetchError> {
    let encoding = match charset {
        Charset::Utf8 => encoding_rs::UTF_8,
        Charset::Latin1 | Charset::Iso88591 => encoding_rs::WINDOWS_1252,
        Charset::Windows1252 => encoding_rs::WINDOWS_1252,
        Charset::ShiftJis => encoding_rs::SHIFT_JIS,
        Charset::Gb2312 => encoding_rs::GBK,
        Charset::Big5 => encoding_rs::BIG5,
        Charset::Other(name) => Encoding::for_label(name.as_bytes()).unwrap_or(encoding_rs::UTF_8),
    };

    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "Failed to decode content with encoding: {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}

use chrono::{DateTime, Utc};
use readability::extractor;
use scraper::{Html, Selector};
use url::Url;

use crate::extractor::model::IngestedDocument;

pub fn extract(html: &str, url: &Url) -> Option<IngestedDocument> {
    let meta = PageMeta::parse(html, url);

    // Try readability first
    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url) {
        return Some(IngestedDocument {
            text: article.text,
            title: non_empty(article.title).or(meta.title),
            authors: meta.authors,
            publish_date: meta.publish_date,
            image_url: meta.image_url,
        });
    }

    // Fallback to basic scraping if readability fails
    fallback_extract(html, meta)
}

/// Metadata a page declares about itself, read from standard meta tags.
struct PageMeta {
    title: Option<String>,
    authors: Vec<String>,
    publish_date: Option<DateTime<Utc>>,
    image_url: Option<Url>,
}

impl PageMeta {
    fn parse(html: &str, base_url: &Url) -> Self {
        let document = Html::parse_document(html);

        let authors = meta_contents(&document, "meta[name='author']")
            .chain(meta_contents(&document, "meta[property='article:author']"))
            .fold(Vec::new(), |mut acc, author| {
                if !acc.contains(&author) {
                    acc.push(author);
                }
                acc
            });

        let publish_date = meta_contents(&document, "meta[property='article:published_time']")
            .chain(meta_contents(&document, "meta[name='date']"))
            .find_map(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let image_url = meta_contents(&document, "meta[property='og:image']")
            .find_map(|content| base_url.join(&content).ok());

        Self {
            title: extract_title(&document),
            authors,
            publish_date,
            image_url,
        }
    }
}

fn meta_contents<'a>(
    document: &'a Html,
    selector_str: &str,
) -> impl Iterator<Item = String> + use<'a> {
    let selector = Selector::parse(selector_str).ok();
    selector
        .into_iter()
        .flat_map(move |selector| {
            document
                .select(&selector)
                .filter_map(|element| element.value().attr("content").map(str::to_string))
                .collect::<Vec<_>>()
        })
        .filter(|content| !content.trim().is_empty())
}

fn extract_title(document: &Html) -> Option<String> {
    // Try og:title first
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content")
                && !content.trim().is_empty()
            {
                return Some(content.to_string());
            }
        }
    }

    // Then the document title, then the first heading
    for selector_str in ["title", "h1"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let title = element.text().collect::<String>().trim().to_string();
                if !title.is_empty() {
                    return Some(title);
                }
            }
        }
    }

    None
}

fn fallback_extract(html: &str, meta: PageMeta) -> Option<IngestedDocument> {
    let document = Html::parse_document(html);

    let text = extract_main_content(&document);
    if text.trim().is_empty() {
        return None;
    }

    Some(IngestedDocument {
        text,
        title: meta.title,
        authors: meta.authors,
        publish_date: meta.publish_date,
        image_url: meta.image_url,
    })
}

fn extract_main_content(document: &Html) -> String {
    let content_selectors = [
        "article",
        "main",
        "[role='main']",
        ".content",
        ".post",
        ".article",
        "#content",
        "#main",
        ".entry-content",
    ];

    for selector_str in content_selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let text = element.text().collect::<String>();
                if text.trim().len() > 100 {
                    // Basic length check
                    return text;
                }
            }
        }
    }

    // Last resort: the whole body
    if let Ok(body_selector) = Selector::parse("body")
        && let Some(body) = document.select(&body_selector).next()
    {
        return body.text().collect::<String>();
    }

    String::new()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

//! Visible text extraction from paragraph and heading elements.

use super::http_client::HttpClient;
use crate::error::Result;
use scraper::{Html, Selector};
use tracing::info;

/// Elements whose text counts as page content.
const TEXT_SELECTOR: &str = "p, h1, h2, h3";

/// Lower-cased text of every non-empty `p`, `h1`, `h2`, `h3`, in document
/// order, blocks separated by one space.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse(TEXT_SELECTOR) else {
        return String::new();
    };

    let blocks: Vec<String> = document
        .select(&sel)
        .map(|el| el.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.trim().to_lowercase())
        .collect();

    blocks.join(" ")
}

/// Fetch `url` and extract its visible text.
///
/// Transport failures, non-2xx statuses and a failed parse are errors, so
/// callers never run the text pipeline on a missing page.
pub async fn fetch_visible_text(client: &HttpClient, url: &str, timeout_ms: u64) -> Result<String> {
    let resp = client.get_ok(url, timeout_ms).await?;
    let body = resp.body;
    let text = tokio::task::spawn_blocking(move || visible_text(&body)).await?;
    info!(url, chars = text.len(), "extracted visible text");
    Ok(text)
}

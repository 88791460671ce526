//! The two scan features: external resources and privacy-policy word counts.

use crate::acquisition::{discover_privacy_policy, fetch_visible_text, HttpClient};
use crate::capture::{extract_external_resources, NetworkRecorder, ResourceReport};
use crate::config::ScanConfig;
use crate::error::Result;
use crate::nlp::{FrequencyTable, Pipeline};
use crate::report::write_json;
use tracing::info;

/// Record the requests `site` makes while loading and group the third-party ones.
pub async fn collect_external_resources(
    recorder: &dyn NetworkRecorder,
    site: &str,
) -> Result<ResourceReport> {
    let logs = recorder.record(site).await?;
    Ok(extract_external_resources(&logs, site))
}

/// Word frequencies of the visible text at `page_url`.
///
/// Fetch failures are returned before any text processing happens.
pub async fn page_word_frequency(
    client: &HttpClient,
    page_url: &str,
    timeout_ms: u64,
) -> Result<FrequencyTable> {
    let text = fetch_visible_text(client, page_url, timeout_ms).await?;
    Ok(Pipeline::new().frequencies(&text))
}

/// Word frequencies of the privacy policy linked from `site`, or of `page`
/// when given.
pub async fn privacy_policy_word_frequency(
    client: &HttpClient,
    site: &str,
    page: Option<&str>,
    timeout_ms: u64,
) -> Result<(String, FrequencyTable)> {
    let page_url = match page {
        Some(page) => page.to_string(),
        None => discover_privacy_policy(client, site, timeout_ms)
            .await?
            .to_string(),
    };
    let table = page_word_frequency(client, &page_url, timeout_ms).await?;
    info!(page = %page_url, distinct = table.len(), total = table.total(), "counted words");
    Ok((page_url, table))
}

/// Capture external resources and write them to `config.resources_out`.
pub async fn capture_external_resources(
    recorder: &dyn NetworkRecorder,
    config: &ScanConfig,
) -> Result<ResourceReport> {
    let report = collect_external_resources(recorder, &config.site).await?;
    write_json(&config.resources_out, &report)?;
    Ok(report)
}

/// Count privacy-policy words and write them to `config.words_out`.
///
/// Nothing is written when the page cannot be fetched.
pub async fn calculate_word_frequency(
    client: &HttpClient,
    config: &ScanConfig,
    page: Option<&str>,
) -> Result<(String, FrequencyTable)> {
    let (page_url, table) =
        privacy_policy_word_frequency(client, &config.site, page, config.timeout_ms).await?;
    write_json(&config.words_out, &table)?;
    Ok((page_url, table))
}

//! Thin async HTTP client over reqwest.

use crate::config::USER_AGENT;
use crate::error::{Result, ScanError};
use std::time::Duration;
use tracing::debug;

/// A fetched response body with its final URL and status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// URL after redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client; cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client that follows redirects and sends the privscan user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|source| ScanError::Fetch {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }

    /// GET `url`, giving up after `timeout_ms`. Any HTTP status is returned.
    pub async fn get(&self, url: &str, timeout_ms: u64) -> Result<HttpResponse> {
        let fetch_err = |source| ScanError::Fetch {
            url: url.to_string(),
            source,
        };

        let resp = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await
            .map_err(fetch_err)?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let body = resp.text().await.map_err(fetch_err)?;
        debug!(url, status, bytes = body.len(), "fetched");

        Ok(HttpResponse {
            url: final_url,
            status,
            body,
        })
    }

    /// GET `url` and fail with [`ScanError::Status`] unless it answers 2xx.
    pub async fn get_ok(&self, url: &str, timeout_ms: u64) -> Result<HttpResponse> {
        let resp = self.get(url, timeout_ms).await?;
        if !resp.is_success() {
            return Err(ScanError::Status {
                url: url.to_string(),
                status: resp.status,
            });
        }
        Ok(resp)
    }
}

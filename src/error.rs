//! Error types for privscan.

use thiserror::Error;

/// Failures of the I/O collaborators around the text pipeline.
///
/// The pipeline itself never fails; these surface before it runs.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Transport-level HTTP failure (DNS, connect, timeout, body read).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Chromium launch, navigation or shutdown failure.
    #[error("browser error: {0}")]
    Browser(String),

    #[error("Chromium not found. Set PRIVSCAN_CHROMIUM_PATH or install Chrome/Chromium")]
    ChromiumNotFound,

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTML parsing task panicked or was cancelled.
    #[error("failed to parse HTML: {0}")]
    Parse(#[from] tokio::task::JoinError),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    pub fn browser(err: impl std::fmt::Display) -> Self {
        ScanError::Browser(err.to_string())
    }

    /// Parse a URL, mapping failures to [`ScanError::InvalidUrl`].
    pub fn parse_url(raw: &str) -> Result<url::Url> {
        url::Url::parse(raw).map_err(|source| ScanError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }
}

/// Result type for privscan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert!(ScanError::parse_url("https://example.com").is_ok());
        let err = ScanError::parse_url("not a url").unwrap_err();
        assert!(matches!(err, ScanError::InvalidUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_status_message() {
        let err = ScanError::Status {
            url: "https://example.com/privacy".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://example.com/privacy returned HTTP 404");
    }

    #[tokio::test]
    async fn test_panicked_parse_task_is_parse_error() {
        async fn parse() -> Result<String> {
            let text = tokio::task::spawn_blocking(|| -> String { panic!("malformed markup") }).await?;
            Ok(text)
        }

        let err = parse().await.unwrap_err();
        assert!(matches!(err, ScanError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse HTML"));
    }
}

//! Network request recording through headless Chromium.

use super::chromium::find_chromium;
use super::resources::PerformanceLogEntry;
use crate::error::{Result, ScanError};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{EnableParams, EventRequestWillBeSent};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Something that loads a page and reports the requests it made.
#[async_trait]
pub trait NetworkRecorder: Send + Sync {
    /// Load `url` and return one performance-log record per request.
    async fn record(&self, url: &str) -> Result<Vec<PerformanceLogEntry>>;
}

/// Headless Chromium driven over the DevTools protocol.
#[derive(Debug, Clone)]
pub struct ChromeRecorder {
    executable: PathBuf,
    no_sandbox: bool,
    /// Upper bound for the whole page load.
    timeout: Duration,
    /// Stop listening once no request arrives for this long.
    quiet_period: Duration,
}

impl ChromeRecorder {
    pub fn new(executable: PathBuf) -> Self {
        Self {
            executable,
            no_sandbox: false,
            timeout: Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS),
            quiet_period: Duration::from_millis(crate::config::DEFAULT_QUIET_PERIOD_MS),
        }
    }

    /// Use the first Chromium [`find_chromium`] locates.
    pub fn discover() -> Result<Self> {
        let executable = find_chromium().ok_or(ScanError::ChromiumNotFound)?;
        Ok(Self::new(executable))
    }

    pub fn with_no_sandbox(mut self, no_sandbox: bool) -> Self {
        self.no_sandbox = no_sandbox;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    fn browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.executable)
            .arg("--ignore-certificate-errors")
            .request_timeout(self.timeout);
        if self.no_sandbox {
            builder = builder.no_sandbox();
        }
        builder.build().map_err(ScanError::Browser)
    }
}

#[async_trait]
impl NetworkRecorder for ChromeRecorder {
    async fn record(&self, url: &str) -> Result<Vec<PerformanceLogEntry>> {
        let config = self.browser_config()?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(ScanError::browser)?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        info!(executable = %self.executable.display(), "launched Chromium");

        let recorded = self.capture(&browser, url).await;

        if let Err(e) = browser.close().await {
            warn!(error = %e, "closing Chromium");
        }
        if let Err(e) = browser.wait().await {
            warn!(error = %e, "waiting for Chromium to exit");
        }
        handler_task.abort();

        let logs = recorded?;
        info!(url, requests = logs.len(), "recorded network requests");
        Ok(logs)
    }
}

impl ChromeRecorder {
    async fn capture(&self, browser: &Browser, url: &str) -> Result<Vec<PerformanceLogEntry>> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(ScanError::browser)?;
        let mut requests = page
            .event_listener::<EventRequestWillBeSent>()
            .await
            .map_err(ScanError::browser)?;
        page.execute(EnableParams::default())
            .await
            .map_err(ScanError::browser)?;

        page.goto(url).await.map_err(ScanError::browser)?;
        debug!(url, "page loaded, draining request events");

        let deadline = Instant::now() + self.timeout;
        let mut logs = Vec::new();
        loop {
            let wait = self.quiet_period.min(deadline.saturating_duration_since(Instant::now()));
            if wait.is_zero() {
                break;
            }
            match tokio::time::timeout(wait, requests.next()).await {
                Ok(Some(event)) => match serde_json::to_value(&*event) {
                    Ok(params) => logs.push(PerformanceLogEntry::request_will_be_sent(params)),
                    Err(e) => warn!(error = %e, "unserializable request event"),
                },
                Ok(None) | Err(_) => break,
            }
        }

        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_settings() {
        let recorder = ChromeRecorder::new(PathBuf::from("/usr/bin/chromium"))
            .with_no_sandbox(true)
            .with_timeout(Duration::from_secs(5))
            .with_quiet_period(Duration::from_millis(250));
        assert!(recorder.no_sandbox);
        assert_eq!(recorder.timeout, Duration::from_secs(5));
        assert_eq!(recorder.quiet_period, Duration::from_millis(250));
    }

    struct Canned(Vec<PerformanceLogEntry>);

    #[async_trait]
    impl NetworkRecorder for Canned {
        async fn record(&self, _url: &str) -> Result<Vec<PerformanceLogEntry>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_recorder_is_object_safe() {
        let recorder: Box<dyn NetworkRecorder> = Box::new(Canned(vec![
            PerformanceLogEntry::request_will_be_sent(serde_json::json!({ "type": "Image" })),
        ]));
        let logs = recorder.record("https://example.com").await.unwrap();
        assert_eq!(logs.len(), 1);
    }
}

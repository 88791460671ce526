//! Run configuration: target site, output locations, timeouts.

use std::path::PathBuf;

/// Site scanned when none is given.
pub const DEFAULT_SITE: &str = "https://www.cfcunderwriting.com";

/// Default resource report location.
pub const DEFAULT_RESOURCES_FILE: &str = "resources.json";

/// Default word-frequency report location.
pub const DEFAULT_WORD_COUNT_FILE: &str = "word_count.json";

/// Per-request HTTP timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// How long the recorder keeps listening after the last network request.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 2_000;

pub const USER_AGENT: &str = concat!("privscan/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Site URL; also the prefix that marks a request as first-party.
    pub site: String,
    pub resources_out: PathBuf,
    pub words_out: PathBuf,
    pub timeout_ms: u64,
    pub quiet_period_ms: u64,
    /// Launch Chromium with `--no-sandbox` (containers, CI).
    pub no_sandbox: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE.to_string(),
            resources_out: PathBuf::from(DEFAULT_RESOURCES_FILE),
            words_out: PathBuf::from(DEFAULT_WORD_COUNT_FILE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            no_sandbox: false,
        }
    }
}

impl ScanConfig {
    /// Defaults overridden by `PRIVSCAN_SITE` and `PRIVSCAN_CHROMIUM_NO_SANDBOX`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(site) = std::env::var("PRIVSCAN_SITE") {
            if !site.trim().is_empty() {
                config.site = site.trim().to_string();
            }
        }
        config.no_sandbox = std::env::var("PRIVSCAN_CHROMIUM_NO_SANDBOX").is_ok();
        config
    }

    pub fn with_site(mut self, site: Option<String>) -> Self {
        if let Some(site) = site {
            self.site = site;
        }
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        if let Some(ms) = timeout_ms {
            self.timeout_ms = ms;
        }
        self
    }
}

/// Data directory: `PRIVSCAN_HOME`, or `~/.privscan`.
pub fn privscan_home() -> PathBuf {
    if let Ok(home) = std::env::var("PRIVSCAN_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".privscan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.site, "https://www.cfcunderwriting.com");
        assert_eq!(config.resources_out, PathBuf::from("resources.json"));
        assert_eq!(config.words_out, PathBuf::from("word_count.json"));
        assert!(!config.no_sandbox);
    }

    #[test]
    fn test_overrides() {
        let config = ScanConfig::default()
            .with_site(Some("https://example.com".into()))
            .with_timeout_ms(Some(500));
        assert_eq!(config.site, "https://example.com");
        assert_eq!(config.timeout_ms, 500);

        let config = config.with_site(None).with_timeout_ms(None);
        assert_eq!(config.site, "https://example.com");
        assert_eq!(config.timeout_ms, 500);
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("privscan/"));
    }
}

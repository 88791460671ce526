//! `privscan run`: both scans, one after the other.

use crate::cli::output::{self, Styled};
use crate::cli::{resources_cmd, words_cmd};
use anyhow::{bail, Result};
use privscan::ScanConfig;
use tracing::{error, info};

/// Run the resource capture, then the word count; a failure in the first
/// does not stop the second.
pub async fn run(config: &ScanConfig) -> Result<()> {
    let s = Styled::new();
    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
    }

    let mut failed = Vec::new();

    info!(site = %config.site, "capturing external resources");
    if let Err(e) = resources_cmd::run(config).await {
        error!("{e:#}");
        if !output::is_quiet() {
            eprintln!("  {} resources: {e:#}", s.fail_sym());
        }
        failed.push("resources");
    }

    info!(site = %config.site, "calculating word frequency");
    if let Err(e) = words_cmd::run(config, None).await {
        error!("{e:#}");
        if !output::is_quiet() {
            eprintln!("  {} words: {e:#}", s.fail_sym());
        }
        failed.push("words");
    }

    if !failed.is_empty() {
        bail!("{} failed", failed.join(" and "));
    }
    Ok(())
}

//! `privscan resources`: list third-party resources loaded by the site.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use privscan::capture::{ChromeRecorder, ResourceReport};
use privscan::scan::capture_external_resources;
use privscan::ScanConfig;
use std::time::{Duration, Instant};

/// Run the resources command.
pub async fn run(config: &ScanConfig) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();

    let recorder = ChromeRecorder::discover()
        .context("cannot record network requests")?
        .with_no_sandbox(config.no_sandbox)
        .with_timeout(Duration::from_millis(config.timeout_ms))
        .with_quiet_period(Duration::from_millis(config.quiet_period_ms));

    if !output::is_quiet() && !output::is_json() {
        eprintln!("  Recording requests made by {}...", config.site);
    }

    let report = capture_external_resources(&recorder, config)
        .await
        .with_context(|| format!("failed to capture external resources of {}", config.site))?;

    if output::is_json() {
        output::print_json(&report);
        return Ok(());
    }

    if !output::is_quiet() {
        print_summary(&s, &report, config);
        eprintln!("  Done in {:.1}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

/// Per-kind counts, plus the URLs themselves with --verbose.
pub fn print_summary(s: &Styled, report: &ResourceReport, config: &ScanConfig) {
    eprintln!();
    output::print_section(s, "External resources");
    for (kind, urls) in report.iter() {
        output::print_check(s.ok_sym(), kind.as_str(), &urls.len().to_string());
        if output::is_verbose() {
            for url in urls {
                eprintln!("        {}", s.dim(url));
            }
        }
    }
    eprintln!();
    eprintln!(
        "  {} resources written to {}",
        report.len(),
        s.cyan(&config.resources_out.display().to_string())
    );
    if report.is_empty() {
        eprintln!("  {} no third-party requests observed", s.warn_sym());
    }
}

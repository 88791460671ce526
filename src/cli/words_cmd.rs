//! `privscan words`: word frequencies of the site's privacy policy.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use privscan::acquisition::HttpClient;
use privscan::nlp::FrequencyTable;
use privscan::scan::calculate_word_frequency;
use privscan::ScanConfig;
use serde::Serialize;
use std::time::Instant;

/// Entries shown in the terminal summary.
const SUMMARY_ROWS: usize = 10;

/// `--json` payload; `words` keeps descending-count order.
#[derive(Debug, Serialize)]
struct WordsOutput<'a> {
    page: &'a str,
    distinct: usize,
    total: usize,
    words: &'a FrequencyTable,
}

impl<'a> WordsOutput<'a> {
    fn new(page: &'a str, table: &'a FrequencyTable) -> Self {
        Self {
            page,
            distinct: table.len(),
            total: table.total(),
            words: table,
        }
    }
}

/// Run the words command.
pub async fn run(config: &ScanConfig, page: Option<&str>) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();
    let client = HttpClient::new()?;

    let (page_url, table) = calculate_word_frequency(&client, config, page)
        .await
        .context("failed to count privacy policy words; no report written")?;

    if output::is_json() {
        output::print_json(&WordsOutput::new(&page_url, &table));
        return Ok(());
    }

    if !output::is_quiet() {
        eprintln!();
        output::print_section(&s, "Privacy policy");
        eprintln!("    {}", s.cyan(&page_url));
        eprintln!();
        print_table(&s, &table);
        eprintln!(
            "  {} distinct words written to {}",
            table.len(),
            s.cyan(&config.words_out.display().to_string())
        );
        eprintln!("  Done in {:.1}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

/// Top entries of the table, or all of them with --verbose.
pub fn print_table(s: &Styled, table: &FrequencyTable) {
    let rows = if output::is_verbose() {
        table.entries()
    } else {
        table.top(SUMMARY_ROWS)
    };
    for (word, count) in rows {
        eprintln!("    {:>6}  {}", s.bold(&count.to_string()), word);
    }
    if rows.len() < table.len() {
        eprintln!("    {}", s.dim(&format!("... {} more", table.len() - rows.len())));
    }
    eprintln!();
}

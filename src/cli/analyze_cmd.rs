//! `privscan analyze`: run the text pipeline on a local file or stdin.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use privscan::nlp::Pipeline;
use privscan::report::write_json;
use std::io::Read;
use std::path::Path;

/// Run the analyze command.
pub fn run(file: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let s = Styled::new();

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let table = Pipeline::new().frequencies(&text);

    if let Some(out) = out {
        write_json(out, &table).with_context(|| format!("failed to write {}", out.display()))?;
    }

    if output::is_json() {
        output::print_json(&table);
        return Ok(());
    }

    if !output::is_quiet() {
        crate::cli::words_cmd::print_table(&s, &table);
        eprintln!("  {} distinct words, {} total", table.len(), table.total());
    }
    Ok(())
}

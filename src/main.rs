use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use privscan::ScanConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "privscan",
    version,
    about = "List the third-party resources a site loads and count the words of its privacy policy"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print machine-readable JSON to stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show every entry and debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Capture external resources, then count privacy policy words.
    Run {
        /// Site to scan (defaults to PRIVSCAN_SITE or the built-in site)
        #[arg(long)]
        site: Option<String>,
    },

    /// Record the third-party resources the site loads.
    Resources {
        #[arg(long)]
        site: Option<String>,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Count words on the site's privacy policy page.
    Words {
        #[arg(long)]
        site: Option<String>,
        /// Page to analyze instead of the discovered privacy policy
        #[arg(long)]
        page: Option<String>,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Count words of a local text file, or stdin.
    Analyze {
        file: Option<PathBuf>,
        /// Also write the table to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Output modes are read back through cli::output.
    if args.json {
        std::env::set_var("PRIVSCAN_JSON", "1");
    }
    if args.quiet {
        std::env::set_var("PRIVSCAN_QUIET", "1");
    }
    if args.verbose {
        std::env::set_var("PRIVSCAN_VERBOSE", "1");
    }

    init_tracing(args.log_json, args.quiet, args.verbose)?;

    let base = ScanConfig::from_env().with_timeout_ms(args.timeout_ms);
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        match args.command {
            Commands::Run { site } => {
                let config = base.with_site(site);
                cli::run_cmd::run(&config).await
            }
            Commands::Resources { site, out } => {
                let mut config = base.with_site(site);
                if let Some(out) = out {
                    config.resources_out = out;
                }
                cli::resources_cmd::run(&config).await
            }
            Commands::Words { site, page, out } => {
                let mut config = base.with_site(site);
                if let Some(out) = out {
                    config.words_out = out;
                }
                cli::words_cmd::run(&config, page.as_deref()).await
            }
            Commands::Analyze { file, out } => {
                cli::analyze_cmd::run(file.as_deref(), out.as_deref())
            }
        }
    })
}

fn init_tracing(json: bool, quiet: bool, verbose: bool) -> Result<()> {
    let level = if verbose {
        "privscan=debug"
    } else if quiet {
        "privscan=warn"
    } else {
        "privscan=info"
    };
    let filter = EnvFilter::from_default_env().add_directive(level.parse()?);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}

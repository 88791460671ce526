//! CLI subcommand implementations for the privscan binary.

pub mod analyze_cmd;
pub mod output;
pub mod resources_cmd;
pub mod run_cmd;
pub mod words_cmd;

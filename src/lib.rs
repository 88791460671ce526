//! privscan: list the third-party resources a site loads and count the words
//! of its privacy policy.
//!
//! The [`nlp`] module holds the text normalization pipeline; [`acquisition`]
//! and [`capture`] fetch its inputs and [`report`] persists the results.

pub mod acquisition;
pub mod capture;
pub mod config;
pub mod error;
pub mod nlp;
pub mod report;
pub mod scan;

pub use config::ScanConfig;
pub use error::{Result, ScanError};

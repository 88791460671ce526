//! Browser capture of the network requests a page makes.

pub mod chromium;
pub mod recorder;
pub mod resources;

pub use chromium::find_chromium;
pub use recorder::{ChromeRecorder, NetworkRecorder};
pub use resources::{extract_external_resources, PerformanceLogEntry, ResourceKind, ResourceReport};

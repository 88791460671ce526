//! Page acquisition: HTTP fetching, hyperlink discovery and visible text.

pub mod http_client;
pub mod links;
pub mod visible_text;

pub use http_client::{HttpClient, HttpResponse};
pub use links::{discover_privacy_policy, extract_hyperlinks, find_privacy_policy, Hyperlink};
pub use visible_text::{fetch_visible_text, visible_text};

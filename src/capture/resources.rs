//! External-resource extraction from performance-log records.
//!
//! A record wraps one DevTools event as a JSON string:
//!
//! ```text
//! { "message": "{\"message\": {\"method\": \"Network.requestWillBeSent\",
//!                \"params\": {\"request\": {\"url\": ...}, \"type\": \"Image\"}}}" }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// DevTools method of an outgoing request.
pub const REQUEST_WILL_BE_SENT: &str = "Network.requestWillBeSent";

/// One performance-log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLogEntry {
    /// JSON-encoded `{"message": {"method": ..., "params": ...}}`.
    pub message: String,
}

impl PerformanceLogEntry {
    /// Wrap a DevTools event in the record shape.
    pub fn new(method: &str, params: Value) -> Self {
        let inner = json!({ "message": { "method": method, "params": params } });
        Self {
            message: inner.to_string(),
        }
    }

    /// Record for a `Network.requestWillBeSent` event.
    pub fn request_will_be_sent(params: Value) -> Self {
        Self::new(REQUEST_WILL_BE_SENT, params)
    }

    /// Decoded inner `message` object.
    pub fn event(&self) -> Option<Value> {
        let outer: Value = serde_json::from_str(&self.message).ok()?;
        match outer.get("message") {
            Some(inner) if inner.is_object() => Some(inner.clone()),
            _ => None,
        }
    }
}

/// Resource types reported, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Image,
    Media,
    Font,
    Stylesheet,
    Script,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Image,
        ResourceKind::Media,
        ResourceKind::Font,
        ResourceKind::Stylesheet,
        ResourceKind::Script,
    ];

    /// DevTools `ResourceType` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "Image",
            ResourceKind::Media => "Media",
            ResourceKind::Font => "Font",
            ResourceKind::Stylesheet => "Stylesheet",
            ResourceKind::Script => "Script",
        }
    }

    pub fn from_devtools(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// External resource URLs grouped by kind.
///
/// Serialises with all five kinds present, in [`ResourceKind::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceReport {
    urls: [Vec<String>; 5],
}

impl ResourceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ResourceKind, url: impl Into<String>) {
        self.urls[kind as usize].push(url.into());
    }

    pub fn get(&self, kind: ResourceKind) -> &[String] {
        &self.urls[kind as usize]
    }

    /// Total URLs across all kinds.
    pub fn len(&self) -> usize {
        self.urls.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &[String])> {
        ResourceKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

impl Serialize for ResourceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ResourceKind::ALL.len()))?;
        for (kind, urls) in self.iter() {
            map.serialize_entry(kind.as_str(), urls)?;
        }
        map.end()
    }
}

/// Collect the external resources requested during a page load.
///
/// Keeps `Network.requestWillBeSent` records with a request URL that does
/// not start with `site_prefix` and a type among [`ResourceKind`]. Records
/// whose message cannot be decoded are logged and skipped.
pub fn extract_external_resources(logs: &[PerformanceLogEntry], site_prefix: &str) -> ResourceReport {
    let mut report = ResourceReport::new();

    for (i, entry) in logs.iter().enumerate() {
        let Some(event) = entry.event() else {
            warn!(record = i, "skipping performance log record without a decodable message");
            continue;
        };

        if event.get("method").and_then(Value::as_str) != Some(REQUEST_WILL_BE_SENT) {
            continue;
        }

        let Some(params) = event.get("params") else {
            continue;
        };
        let Some(url) = params
            .get("request")
            .and_then(|r| r.get("url"))
            .and_then(Value::as_str)
        else {
            continue;
        };

        if url.starts_with(site_prefix) {
            continue;
        }

        let Some(kind) = params
            .get("type")
            .and_then(Value::as_str)
            .and_then(ResourceKind::from_devtools)
        else {
            continue;
        };

        report.push(kind, url);
    }

    debug!(records = logs.len(), resources = report.len(), "extracted external resources");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(raw: &str) -> PerformanceLogEntry {
        PerformanceLogEntry {
            message: raw.to_string(),
        }
    }

    #[test]
    fn test_event_roundtrip() {
        let entry = PerformanceLogEntry::request_will_be_sent(json!({
            "request": { "url": "https://cdn.example.net/a.js" },
            "type": "Script"
        }));
        let event = entry.event().unwrap();
        assert_eq!(event["method"], REQUEST_WILL_BE_SENT);
        assert_eq!(event["params"]["type"], "Script");
    }

    #[test]
    fn test_first_party_requests_skipped() {
        let logs = vec![
            PerformanceLogEntry::request_will_be_sent(json!({
                "request": { "url": "https://www.site.com/logo.png" }, "type": "Image"
            })),
            PerformanceLogEntry::request_will_be_sent(json!({
                "request": { "url": "https://cdn.other.com/logo.png" }, "type": "Image"
            })),
        ];
        let report = extract_external_resources(&logs, "https://www.site.com");
        assert_eq!(report.get(ResourceKind::Image), ["https://cdn.other.com/logo.png"]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_other_methods_and_types_skipped() {
        let logs = vec![
            PerformanceLogEntry::new(
                "Network.responseReceived",
                json!({ "request": { "url": "https://x.com/a.css" }, "type": "Stylesheet" }),
            ),
            PerformanceLogEntry::request_will_be_sent(json!({
                "request": { "url": "https://x.com/api" }, "type": "XHR"
            })),
            PerformanceLogEntry::request_will_be_sent(json!({ "type": "Font" })),
            PerformanceLogEntry::request_will_be_sent(json!({
                "request": { "url": "https://x.com/f.woff2" }
            })),
        ];
        assert!(extract_external_resources(&logs, "https://site.com").is_empty());
    }

    #[test]
    fn test_undecodable_records_skipped() {
        let logs = vec![
            record("not json"),
            record(r#"{"other": 1}"#),
            record(r#"{"message": "flat string"}"#),
            PerformanceLogEntry::request_will_be_sent(json!({
                "request": { "url": "https://x.com/v.mp4" }, "type": "Media"
            })),
        ];
        let report = extract_external_resources(&logs, "https://site.com");
        assert_eq!(report.get(ResourceKind::Media), ["https://x.com/v.mp4"]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_report_serializes_all_kinds_in_order() {
        let mut report = ResourceReport::new();
        report.push(ResourceKind::Script, "https://x.com/a.js");
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"Image":[],"Media":[],"Font":[],"Stylesheet":[],"Script":["https://x.com/a.js"]}"#
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ResourceKind::from_devtools("Font"), Some(ResourceKind::Font));
        assert_eq!(ResourceKind::from_devtools("font"), None);
        assert_eq!(ResourceKind::from_devtools("Document"), None);
    }
}

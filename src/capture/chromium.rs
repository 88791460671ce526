//! Chromium executable lookup.

use crate::config::privscan_home;
use std::path::PathBuf;

/// Locate a Chromium or Chrome binary.
///
/// Order: `PRIVSCAN_CHROMIUM_PATH`, the privscan data directory
/// (`~/.privscan/chromium`), the system `PATH`, then the default macOS
/// install location.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. Explicit override
    if let Ok(p) = std::env::var("PRIVSCAN_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. Bundled under the data directory
    let bundled = privscan_home().join("chromium");
    let candidates = if cfg!(target_os = "macos") {
        vec![
            bundled.join("Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
            bundled.join("chrome"),
        ]
    } else {
        vec![bundled.join("chrome"), bundled.join("chrome-linux64/chrome")]
    };
    if let Some(found) = candidates.into_iter().find(|c| c.exists()) {
        return Some(found);
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. macOS default install
    if cfg!(target_os = "macos") {
        let common = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

//! Hyperlink listing and privacy-policy discovery.

use super::http_client::HttpClient;
use crate::error::{Result, ScanError};
use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

/// Link text that marks the privacy policy page.
pub const PRIVACY_POLICY_TEXT: &str = "privacy policy";

/// An anchor on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Visible text, whitespace-collapsed.
    pub text: String,
    /// Raw `href` attribute.
    pub href: String,
}

/// List every `<a href>` in document order.
pub fn extract_hyperlinks(html: &str) -> Vec<Hyperlink> {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&sel)
        .filter_map(|el| {
            let href = el.value().attr("href")?;
            Some(Hyperlink {
                text: collapse_whitespace(&el.text().collect::<String>()),
                href: href.trim().to_string(),
            })
        })
        .collect()
}

/// Resolve the first link labelled "privacy policy" against `base`.
///
/// Falls back to `base` itself when no link matches or its href cannot be
/// resolved.
pub fn find_privacy_policy(links: &[Hyperlink], base: &Url) -> Url {
    let found = links
        .iter()
        .find(|link| link.text.to_lowercase() == PRIVACY_POLICY_TEXT);

    match found {
        Some(link) => match base.join(&link.href) {
            Ok(url) => url,
            Err(e) => {
                warn!(href = %link.href, error = %e, "unresolvable privacy policy link");
                base.clone()
            }
        },
        None => {
            warn!(site = %base, "no privacy policy link found, using site URL");
            base.clone()
        }
    }
}

/// Fetch `site` and locate its privacy policy page.
pub async fn discover_privacy_policy(client: &HttpClient, site: &str, timeout_ms: u64) -> Result<Url> {
    let site_url = ScanError::parse_url(site)?;
    let resp = client.get_ok(site, timeout_ms).await?;
    // Relative hrefs resolve against the page actually served.
    let base = Url::parse(&resp.url).unwrap_or(site_url);

    // scraper is not Send
    let body = resp.body;
    let links = tokio::task::spawn_blocking(move || extract_hyperlinks(&body)).await?;

    let policy = find_privacy_policy(&links, &base);
    info!(links = links.len(), policy = %policy, "privacy policy located");
    Ok(policy)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav>
            <a href="/about">About us</a>
            <a>No href</a>
            <a href="/legal/privacy">  Privacy
                Policy </a>
            <a href="/other-privacy">Privacy Policy</a>
          </nav>
        </body></html>
    "#;

    #[test]
    fn test_extract_hyperlinks() {
        let links = extract_hyperlinks(PAGE);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].text, "About us");
        assert_eq!(links[0].href, "/about");
        assert_eq!(links[1].text, "Privacy Policy");
    }

    #[test]
    fn test_find_privacy_policy_first_match() {
        let base = Url::parse("https://www.example.com").unwrap();
        let url = find_privacy_policy(&extract_hyperlinks(PAGE), &base);
        assert_eq!(url.as_str(), "https://www.example.com/legal/privacy");
    }

    #[test]
    fn test_find_privacy_policy_absolute_href() {
        let base = Url::parse("https://www.example.com").unwrap();
        let links = vec![Hyperlink {
            text: "PRIVACY POLICY".into(),
            href: "https://legal.example.org/privacy".into(),
        }];
        assert_eq!(
            find_privacy_policy(&links, &base).as_str(),
            "https://legal.example.org/privacy"
        );
    }

    #[test]
    fn test_find_privacy_policy_falls_back_to_site() {
        let base = Url::parse("https://www.example.com/").unwrap();
        let links = vec![Hyperlink {
            text: "Privacy notice".into(),
            href: "/privacy".into(),
        }];
        assert_eq!(find_privacy_policy(&links, &base), base);
        assert_eq!(find_privacy_policy(&[], &base), base);
    }
}

//! Site branding
//!
//! The same site is served from several domains (production, staging,
//! regional mirrors), each with its own title. Titles are resolved from the
//! request host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Site name used when no domain-specific title applies
pub const DEFAULT_SITE_TITLE: &str = "Studio";

/// Separator between page and site title
pub const TITLE_SEPARATOR: &str = " | ";

/// Domain-aware site titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBranding {
    /// Title used for unknown hosts
    pub default_title: String,
    /// Title per lower-case host name
    #[serde(default)]
    pub titles: HashMap<String, String>,
}

impl Default for SiteBranding {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_TITLE)
    }
}

/// Normalize a host: lower-case, no scheme, userinfo, path or port
///
/// Bare hosts such as `studio.example:3000` are parsed as `http://` URLs.
fn normalize_host(host: &str) -> String {
    let host = host.trim();
    Url::parse(host)
        .ok()
        .filter(|url| url.host_str().is_some())
        .or_else(|| Url::parse(&format!("http://{}", host)).ok())
        .as_ref()
        .and_then(Url::host_str)
        .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
        .unwrap_or_default()
}

impl SiteBranding {
    /// Create branding with a default title and no domain overrides
    pub fn new(default_title: impl Into<String>) -> Self {
        Self {
            default_title: default_title.into(),
            titles: HashMap::new(),
        }
    }

    /// Add a title for a host
    pub fn with_domain(mut self, host: &str, title: impl Into<String>) -> Self {
        self.titles.insert(normalize_host(host), title.into());
        self
    }

    /// Site title for the given host
    ///
    /// Tries the exact host, then the host without `www.`, then the default.
    pub fn title_for_host(&self, host: &str) -> &str {
        let host = normalize_host(host);
        self.titles
            .get(&host)
            .or_else(|| {
                host.strip_prefix("www.")
                    .and_then(|bare| self.titles.get(bare))
            })
            .map(String::as_str)
            .unwrap_or(&self.default_title)
    }

    /// Full document title for a page served from `host`
    pub fn page_title(&self, page: &str, host: &str) -> String {
        let site = self.title_for_host(host);
        let page = page.trim();
        if page.is_empty() || page == site {
            site.to_string()
        } else {
            format!("{}{}{}", page, TITLE_SEPARATOR, site)
        }
    }
}

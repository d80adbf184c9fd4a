//! `[site]` configuration: page metadata.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Colibri Brunch & Bistro"
//! description = "Brunch in Barceloneta"
//! language = "en"
//! url = "https://colibri.example"
//! ```

use crate::config::{ConfigDiagnostics, util::is_absolute_url};
use serde::{Deserialize, Serialize};

/// Metadata for the `<head>` of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Document title. Empty falls back to `content.brand`.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Language code (e.g., "en", "es", "ca").
    pub language: String,

    /// Canonical URL of the published page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && !is_absolute_url(url)
        {
            diag.error_with_hint(
                "site.url",
                format!("`{url}` is not an absolute URL"),
                "include the scheme, e.g. https://colibri.example",
            );
        }
        if self.language.trim().is_empty() {
            diag.error("site.language", "language must not be empty");
        }
    }
}

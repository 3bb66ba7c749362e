//! `[sitemap]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! output = "public/sitemaps"                 # Output directory (relative to config file)
//! base_url = "https://example.com/sitemaps/" # Public URL of the output directory
//! per_map = 50000                            # Max urls per s<N>.xml
//! per_index = 50000                          # Max sitemaps per i<N>.xml
//! minify = false                             # Write documents without indentation
//! ```

use super::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use sitemaps::sitemap::{DEFAULT_PER_INDEX, DEFAULT_PER_MAP};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    /// Output directory for sitemap and index files.
    pub output: PathBuf,
    /// Public URL of the output directory, ending with `/`.
    pub base_url: Option<String>,
    /// Maximum urls per sitemap file.
    pub per_map: usize,
    /// Maximum sitemaps per index file.
    pub per_index: usize,
    /// Write documents without indentation.
    pub minify: bool,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            output: "public/sitemaps".into(),
            base_url: None,
            per_map: DEFAULT_PER_MAP.get(),
            per_index: DEFAULT_PER_INDEX.get(),
            minify: false,
        }
    }
}

impl SitemapSection {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.base_url.as_deref() {
            None => diag.error_with_hint(
                "sitemap.base_url",
                "base URL is required",
                "set `base_url` in [sitemap] or pass --base-url",
            ),
            Some(url) if url::Url::parse(url).is_err() => {
                diag.error("sitemap.base_url", format!("`{url}` is not a valid URL"));
            }
            Some(url) if !url.ends_with('/') => diag.error_with_hint(
                "sitemap.base_url",
                format!("`{url}` must end with `/`"),
                format!("use `{url}/`"),
            ),
            Some(_) => {}
        }

        Self::validate_capacity(diag, "sitemap.per_map", self.per_map, DEFAULT_PER_MAP.get());
        Self::validate_capacity(
            diag,
            "sitemap.per_index",
            self.per_index,
            DEFAULT_PER_INDEX.get(),
        );
    }

    fn validate_capacity(diag: &mut ConfigDiagnostics, field: &'static str, value: usize, limit: usize) {
        if value == 0 {
            diag.error(field, "must be greater than 0");
        } else if value > limit {
            diag.warn(
                field,
                format!("{value} exceeds the sitemaps.org limit of {limit}, crawlers may reject the files"),
            );
        }
    }
}

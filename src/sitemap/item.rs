//! A single URL record fed into a sitemap.

use super::error::{Result, SitemapError};
use super::field::{Changefreq, Priority};
use crate::utils::date::Timestamp;
use serde::{Deserialize, Serialize};

/// One `<url>` entry. `path` is appended to the base URL verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<Changefreq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Item {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: Timestamp) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<Changefreq>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Check field values before the item is accepted into a sitemap.
    pub fn validate(&self) -> Result<()> {
        if let Some(lastmod) = &self.lastmod
            && lastmod.validate().is_err()
        {
            return Err(SitemapError::InvalidTimestamp(lastmod.to_string()));
        }
        if let Some(priority) = &self.priority {
            priority.validate()?;
        }
        Ok(())
    }
}

impl From<&str> for Item {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Item {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::Frequency;

    #[test]
    fn test_item_builder() {
        let item = Item::new("/posts/hello/")
            .with_lastmod(Timestamp::from_ymd(2025, 1, 1))
            .with_changefreq(Frequency::Daily)
            .with_priority(0.8);

        assert_eq!(item.path, "/posts/hello/");
        assert_eq!(item.lastmod, Some(Timestamp::from_ymd(2025, 1, 1)));
        assert_eq!(item.changefreq, Some(Changefreq::Known(Frequency::Daily)));
        assert_eq!(item.priority, Some(Priority::Value(0.8)));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_item_validate_rejects_bad_fields() {
        let item = Item::new("/").with_priority(2.0);
        assert!(matches!(
            item.validate(),
            Err(SitemapError::InvalidPriority(_))
        ));

        let item = Item::new("/").with_lastmod(Timestamp::from_ymd(2023, 2, 29));
        assert!(matches!(
            item.validate(),
            Err(SitemapError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_item_deserialize_json() {
        let item: Item = serde_json::from_str(
            r#"{"path": "/a/", "lastmod": "2024-06-15T14:30:45Z", "changefreq": "sometimes", "priority": "0.3"}"#,
        )
        .unwrap();
        assert_eq!(item.path, "/a/");
        assert_eq!(
            item.lastmod,
            Some(Timestamp::from_ymd_hms(2024, 6, 15, 14, 30, 45))
        );
        assert_eq!(item.changefreq, Some(Changefreq::Raw("sometimes".into())));
        assert_eq!(item.priority, Some(Priority::Text("0.3".into())));

        let item: Item = serde_json::from_str(r#"{"path": "/b/"}"#).unwrap();
        assert_eq!(item, Item::new("/b/"));
    }
}

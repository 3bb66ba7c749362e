//! Field normalization for `<changefreq>` and `<priority>`.
//!
//! `<lastmod>` lives in [`crate::utils::date::Timestamp`].

use super::error::{Result, SitemapError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Priority
// ============================================================================

/// Relative importance hint, conceptually within `0.0..=1.0`.
///
/// Text is emitted verbatim so callers can pre-format or bypass
/// normalization. Numbers are rendered with exactly one fractional digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    Value(f64),
    Text(String),
}

impl Priority {
    /// Reject numeric values outside `0.0..=1.0` (including NaN).
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Value(v) if !(0.0..=1.0).contains(&v) => Err(SitemapError::InvalidPriority(v)),
            _ => Ok(()),
        }
    }

    /// Wire text for `<priority>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self {
            Self::Value(v) => Cow::Owned(format!("{v:.1}")),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<f64> for Priority {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<u8> for Priority {
    fn from(v: u8) -> Self {
        Self::Value(f64::from(v))
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// ============================================================================
// Changefreq
// ============================================================================

/// Crawl frequency vocabulary of the sitemaps protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl Frequency {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl FromStr for Frequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|f| f.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawl frequency hint: a vocabulary member or arbitrary text.
///
/// Unrecognized text is preserved rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Changefreq {
    Known(Frequency),
    Raw(String),
}

impl Changefreq {
    /// Wire text for `<changefreq>`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(freq) => freq.as_str(),
            Self::Raw(s) => s,
        }
    }
}

impl From<Frequency> for Changefreq {
    fn from(freq: Frequency) -> Self {
        Self::Known(freq)
    }
}

impl From<&str> for Changefreq {
    fn from(s: &str) -> Self {
        s.parse::<Frequency>()
            .map_or_else(|()| Self::Raw(s.to_string()), Self::Known)
    }
}

impl From<String> for Changefreq {
    fn from(s: String) -> Self {
        match s.parse::<Frequency>() {
            Ok(freq) => Self::Known(freq),
            Err(()) => Self::Raw(s),
        }
    }
}

impl From<Changefreq> for String {
    fn from(freq: Changefreq) -> Self {
        match freq {
            Changefreq::Known(freq) => freq.as_str().to_string(),
            Changefreq::Raw(s) => s,
        }
    }
}

impl fmt::Display for Changefreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_numeric() {
        assert_eq!(Priority::from(0u8).format(), "0.0");
        assert_eq!(Priority::from(1u8).format(), "1.0");
        assert_eq!(Priority::from(0.0).format(), "0.0");
        assert_eq!(Priority::from(0.7).format(), "0.7");
    }

    #[test]
    fn test_priority_text_is_verbatim() {
        assert_eq!(Priority::from("0.3").format(), "0.3");
        assert_eq!(Priority::from("0.30").format(), "0.30");
        // Text bypasses validation
        assert!(Priority::from("7").validate().is_ok());
    }

    #[test]
    fn test_priority_validate_range() {
        assert!(Priority::from(0.0).validate().is_ok());
        assert!(Priority::from(1.0).validate().is_ok());
        assert!(matches!(
            Priority::from(1.5).validate(),
            Err(SitemapError::InvalidPriority(_))
        ));
        assert!(Priority::from(-0.1).validate().is_err());
        assert!(Priority::from(f64::NAN).validate().is_err());
        assert!(Priority::from(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_priority_serde_untagged() {
        let p: Priority = serde_json::from_str("0.7").unwrap();
        assert_eq!(p, Priority::Value(0.7));
        let p: Priority = serde_json::from_str("1").unwrap();
        assert_eq!(p.format(), "1.0");
        let p: Priority = serde_json::from_str(r#""0.3""#).unwrap();
        assert_eq!(p, Priority::Text("0.3".to_string()));
    }

    #[test]
    fn test_changefreq_known_members() {
        for freq in Frequency::ALL {
            let changefreq = Changefreq::from(freq);
            assert_eq!(changefreq.as_str(), freq.as_str());
            assert_eq!(Changefreq::from(freq.as_str()), changefreq);
        }
        assert_eq!(Changefreq::from(Frequency::Weekly).to_string(), "weekly");
    }

    #[test]
    fn test_changefreq_raw_text_is_preserved() {
        let freq = Changefreq::from("sometimes");
        assert_eq!(freq, Changefreq::Raw("sometimes".to_string()));
        assert_eq!(freq.as_str(), "sometimes");
        // Vocabulary matching is exact
        assert_eq!(
            Changefreq::from("Daily"),
            Changefreq::Raw("Daily".to_string())
        );
    }

    #[test]
    fn test_changefreq_serde() {
        let freq: Changefreq = serde_json::from_str(r#""hourly""#).unwrap();
        assert_eq!(freq, Changefreq::Known(Frequency::Hourly));
        let freq: Changefreq = serde_json::from_str(r#""fortnightly""#).unwrap();
        assert_eq!(freq.as_str(), "fortnightly");
        assert_eq!(serde_json::to_string(&freq).unwrap(), r#""fortnightly""#);
    }
}

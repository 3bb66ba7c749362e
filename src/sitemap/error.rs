//! Sitemap generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building sitemaps and sitemap indexes.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Invalid construction parameters (output directory, base URL).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Operation not permitted in the current lifecycle state.
    #[error("invalid state: {0}")]
    State(&'static str),

    /// A builder was driven past its capacity without being flushed.
    #[error("{kind} is full ({capacity} entries), flush it before adding more")]
    Capacity { kind: &'static str, capacity: usize },

    /// Writing a document to disk failed. Not retried.
    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("priority must be within 0.0..=1.0, got {0}")]
    InvalidPriority(f64),

    #[error("unsupported timestamp `{0}`, expected YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ")]
    InvalidTimestamp(String),
}

pub type Result<T, E = SitemapError> = std::result::Result<T, E>;

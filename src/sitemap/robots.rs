//! `Sitemap:` lines for `robots.txt`.
//!
//! ```text
//! Sitemap: https://example.com/sitemaps/i1.xml
//! Sitemap: https://example.com/sitemaps/i2.xml
//! ```

use super::context::Context;
use super::error::{Result, SitemapError};
use super::index_file_name;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

/// Reference lines for every index file of a closed context.
///
/// Fails before [`Context::close`], since the index count is not final yet.
pub fn sitemap_lines(ctx: &Context) -> Result<SitemapLines> {
    if !ctx.is_closed() {
        return Err(SitemapError::State(
            "sitemap lines require a closed context",
        ));
    }
    Ok(SitemapLines::new(Arc::clone(ctx.base_url()), ctx.index_count()))
}

/// Lazy `Sitemap: <base_url>i<k>.xml` lines for `k = 1..=count`.
///
/// Holds only the base URL and a counter range, so cloning restarts it.
#[derive(Debug, Clone)]
pub struct SitemapLines {
    base_url: Arc<str>,
    ids: Range<usize>,
}

impl SitemapLines {
    pub fn new(base_url: impl Into<Arc<str>>, count: usize) -> Self {
        Self {
            base_url: base_url.into(),
            ids: 1..count + 1,
        }
    }

    fn line(&self, id: usize) -> String {
        format!("Sitemap: {}{}", self.base_url, index_file_name(id))
    }
}

impl Iterator for SitemapLines {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| self.line(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for SitemapLines {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|id| self.line(id))
    }
}

impl ExactSizeIterator for SitemapLines {}

impl FusedIterator for SitemapLines {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::{ContextOptions, Item};
    use std::num::NonZeroUsize;
    use tempfile::TempDir;

    const BASE_URL: &str = "http://example.com/sitemaps/";

    fn line(n: usize) -> String {
        format!("Sitemap: {BASE_URL}i{n}.xml")
    }

    fn closed_context(dir: &TempDir, items: usize) -> Context {
        let five = NonZeroUsize::new(5).unwrap();
        let options = ContextOptions::new(dir.path(), BASE_URL).with_capacity(five, five);
        Context::generate(
            options,
            (0..items).map(|i| Item::new(format!("/something/here/{i}/"))),
        )
        .unwrap()
    }

    #[test]
    fn test_single_index() {
        let tmp = TempDir::new().unwrap();
        let ctx = closed_context(&tmp, 5);
        assert_eq!(sitemap_lines(&ctx).unwrap().collect::<Vec<_>>(), [line(1)]);
    }

    #[test]
    fn test_eleven_items_one_line() {
        let tmp = TempDir::new().unwrap();
        let ctx = closed_context(&tmp, 11);
        assert_eq!(sitemap_lines(&ctx).unwrap().collect::<Vec<_>>(), [line(1)]);
    }

    #[test]
    fn test_multiple_indexes_in_order() {
        let tmp = TempDir::new().unwrap();
        let ctx = closed_context(&tmp, 3 * 5 * 5);
        assert_eq!(ctx.map_count(), 15);
        assert_eq!(
            sitemap_lines(&ctx).unwrap().collect::<Vec<_>>(),
            [line(1), line(2), line(3)]
        );
    }

    #[test]
    fn test_no_items_no_lines() {
        let tmp = TempDir::new().unwrap();
        let ctx = closed_context(&tmp, 0);
        let mut lines = sitemap_lines(&ctx).unwrap();
        assert_eq!(lines.len(), 0);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_lines_are_restartable() {
        let tmp = TempDir::new().unwrap();
        let ctx = closed_context(&tmp, 60);

        let first: Vec<_> = sitemap_lines(&ctx).unwrap().collect();
        let second: Vec<_> = sitemap_lines(&ctx).unwrap().collect();
        assert_eq!(first, second);

        let mut lines = sitemap_lines(&ctx).unwrap();
        let restarted = lines.clone();
        lines.next();
        assert_eq!(restarted.len(), 3);
        assert_eq!(lines.len(), 2);
        assert_eq!(restarted.rev().next(), Some(line(3)));
    }

    #[test]
    fn test_lines_before_close_is_state_error() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = Context::new(ContextOptions::new(tmp.path(), BASE_URL)).unwrap();
        ctx.add("a/").unwrap();
        assert!(matches!(sitemap_lines(&ctx), Err(SitemapError::State(_))));
    }

    #[test]
    fn test_lines_from_count() {
        let lines: Vec<_> = SitemapLines::new(BASE_URL, 2).collect();
        assert_eq!(lines, [line(1), line(2)]);
    }
}

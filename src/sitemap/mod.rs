//! Paginated sitemap generation.
//!
//! Items flow through a two-tier hierarchy of files in one flat directory:
//!
//! ```text
//! Item ──► s<N>.xml (≤ per_map urls) ──► i<M>.xml (≤ per_index sitemaps) ──► robots.txt lines
//! ```
//!
//! | Module    | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `field`   | `<changefreq>` and `<priority>` normalization    |
//! | `item`    | URL record                                       |
//! | `map`     | `<urlset>` builder                               |
//! | `index`   | `<sitemapindex>` builder                         |
//! | `context` | Flush cascade over both builders                 |
//! | `robots`  | `Sitemap:` reference lines                       |
//! | `output`  | Locations and atomic XML writes                  |
//!
//! # Example
//!
//! ```no_run
//! use sitemaps::sitemap::{Context, ContextOptions, Frequency, Item, sitemap_lines};
//!
//! # fn main() -> Result<(), sitemaps::sitemap::SitemapError> {
//! let mut ctx = Context::new(ContextOptions::new("public/sitemaps", "https://example.com/sitemaps/"))?;
//! ctx.add(Item::new("posts/hello/").with_changefreq(Frequency::Weekly).with_priority(0.8))?;
//! ctx.close()?;
//!
//! for line in sitemap_lines(&ctx)? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod field;
mod index;
mod item;
mod map;
mod output;
mod robots;

pub use context::{Context, ContextOptions, Summary};
pub use error::{Result, SitemapError};
pub use field::{Changefreq, Frequency, Priority};
pub use index::IndexBuilder;
pub use item::Item;
pub use map::MapBuilder;
pub use output::Output;
pub use robots::{SitemapLines, sitemap_lines};

use std::num::NonZeroUsize;

/// Namespace shared by `<urlset>` and `<sitemapindex>`.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File extension of every generated document.
pub const EXTENSION: &str = ".xml";

/// Protocol maximum of urls per sitemap.
pub const DEFAULT_PER_MAP: NonZeroUsize = NonZeroUsize::new(50_000).unwrap();

/// Protocol maximum of sitemaps per index.
pub const DEFAULT_PER_INDEX: NonZeroUsize = NonZeroUsize::new(50_000).unwrap();

/// `s<id>.xml`
pub fn map_file_name(id: usize) -> String {
    format!("s{id}{EXTENSION}")
}

/// `i<id>.xml`
pub fn index_file_name(id: usize) -> String {
    format!("i{id}{EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_unpadded() {
        assert_eq!(map_file_name(1), "s1.xml");
        assert_eq!(map_file_name(120), "s120.xml");
        assert_eq!(index_file_name(7), "i7.xml");
    }
}

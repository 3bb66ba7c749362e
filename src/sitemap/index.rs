//! Sitemap index (`<sitemapindex>`) builder.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <sitemap>
//!     <loc>https://example.com/sitemaps/s1.xml</loc>
//!   </sitemap>
//! </sitemapindex>
//! ```

use super::error::{Result, SitemapError};
use super::index_file_name;
use super::output::{Output, write_text_element};
use crate::debug;
use crate::utils::plural::plural_count;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::num::NonZeroUsize;

/// Accumulates map file names for the next `i<N>.xml` file.
#[derive(Debug)]
pub struct IndexBuilder {
    maps: Vec<String>,
    capacity: NonZeroUsize,
    flushed: usize,
}

impl IndexBuilder {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            maps: Vec::new(),
            capacity,
            flushed: 0,
        }
    }

    /// Register a written map file. Fails when the buffer is already full.
    pub fn add(&mut self, map_name: impl Into<String>) -> Result<()> {
        if self.is_full() {
            return Err(SitemapError::Capacity {
                kind: "sitemap index",
                capacity: self.capacity.get(),
            });
        }
        self.maps.push(map_name.into());
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.maps.len() >= self.capacity.get()
    }

    /// Number of index files written so far.
    pub fn flushed(&self) -> usize {
        self.flushed
    }

    /// Write the buffered references as the next index file and return its name.
    pub fn flush(&mut self, output: &Output) -> Result<String> {
        if self.is_empty() {
            return Err(SitemapError::State("cannot flush an empty sitemap index"));
        }

        let id = self.flushed + 1;
        let name = index_file_name(id);
        output.write_document(&name, "sitemapindex", |w| {
            for map in &self.maps {
                w.write_event(Event::Start(BytesStart::new("sitemap")))?;
                write_text_element(w, "loc", &output.location(map))?;
                w.write_event(Event::End(BytesEnd::new("sitemap")))?;
            }
            Ok(())
        })?;

        debug!("index"; "{} ({})", name, plural_count(self.maps.len(), "sitemap"));
        self.flushed = id;
        self.maps.clear();
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::SITEMAP_NS;
    use std::fs;
    use tempfile::TempDir;

    fn builder(capacity: usize) -> IndexBuilder {
        IndexBuilder::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_index_capacity() {
        let mut index = builder(1);
        index.add("s1.xml").unwrap();
        assert!(index.is_full());
        assert!(matches!(
            index.add("s2.xml"),
            Err(SitemapError::Capacity {
                kind: "sitemap index",
                capacity: 1
            })
        ));
    }

    #[test]
    fn test_index_flush_empty_is_error() {
        let tmp = TempDir::new().unwrap();
        let output = Output::new(tmp.path(), "https://example.com/", false);
        assert!(matches!(
            builder(3).flush(&output),
            Err(SitemapError::State(_))
        ));
    }

    #[test]
    fn test_index_document() {
        let tmp = TempDir::new().unwrap();
        let output = Output::new(tmp.path(), "https://example.com/sitemaps/", false);
        let mut index = builder(3);
        index.add("s1.xml").unwrap();
        index.add("s2.xml").unwrap();

        assert_eq!(index.flush(&output).unwrap(), "i1.xml");
        assert!(index.is_empty());

        let xml = fs::read_to_string(tmp.path().join("i1.xml")).unwrap();
        assert!(xml.contains(&format!(r#"<sitemapindex xmlns="{SITEMAP_NS}">"#)));
        assert_eq!(xml.matches("<sitemap>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/sitemaps/s1.xml</loc>"));
        assert!(xml.contains("<loc>https://example.com/sitemaps/s2.xml</loc>"));
        assert!(xml.trim_end().ends_with("</sitemapindex>"));

        index.add("s3.xml").unwrap();
        assert_eq!(index.flush(&output).unwrap(), "i2.xml");
        assert_eq!(index.flushed(), 2);
    }
}

//! Sitemap (`<urlset>`) builder.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/posts/hello/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use super::error::{Result, SitemapError};
use super::item::Item;
use super::output::{Output, XmlWriter, write_text_element};
use super::map_file_name;
use crate::debug;
use crate::utils::plural::plural_count;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io;
use std::num::NonZeroUsize;

/// Accumulates items for the next `s<N>.xml` file.
#[derive(Debug)]
pub struct MapBuilder {
    items: Vec<Item>,
    capacity: NonZeroUsize,
    /// Number of maps written so far; the next flush gets `flushed + 1`.
    flushed: usize,
}

impl MapBuilder {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            flushed: 0,
        }
    }

    /// Append an item. Fails when the buffer is already full.
    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(SitemapError::Capacity {
                kind: "sitemap",
                capacity: self.capacity.get(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity.get()
    }

    /// Number of map files written so far.
    pub fn flushed(&self) -> usize {
        self.flushed
    }

    /// Write the buffered items as the next map file and return its name.
    pub fn flush(&mut self, output: &Output) -> Result<String> {
        if self.is_empty() {
            return Err(SitemapError::State("cannot flush an empty sitemap"));
        }

        let id = self.flushed + 1;
        let name = map_file_name(id);
        output.write_document(&name, "urlset", |w| write_items(w, output, &self.items))?;

        debug!("sitemap"; "{} ({})", name, plural_count(self.items.len(), "url"));
        self.flushed = id;
        self.items.clear();
        Ok(name)
    }
}

fn write_items(w: &mut XmlWriter, output: &Output, items: &[Item]) -> io::Result<()> {
    for item in items {
        w.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(w, "loc", &output.location(&item.path))?;
        if let Some(lastmod) = &item.lastmod {
            write_text_element(w, "lastmod", &lastmod.to_string())?;
        }
        if let Some(changefreq) = &item.changefreq {
            write_text_element(w, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = &item.priority {
            write_text_element(w, "priority", &priority.format())?;
        }
        w.write_event(Event::End(BytesEnd::new("url")))?;
    }
    Ok(())
}

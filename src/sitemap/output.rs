//! Document output: location building and durable XML writes.
//!
//! Every document is written to a hidden temporary file next to its final
//! name and renamed into place once complete, so readers never observe a
//! partially written sitemap.

use super::SITEMAP_NS;
use super::error::{Result, SitemapError};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) type XmlWriter = Writer<BufWriter<File>>;

/// Output directory, base URL and document style shared by both builders.
#[derive(Debug, Clone)]
pub struct Output {
    dir: PathBuf,
    base_url: Arc<str>,
    minify: bool,
}

impl Output {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<Arc<str>>, minify: bool) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
            minify,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base_url(&self) -> &Arc<str> {
        &self.base_url
    }

    /// Absolute location: base URL concatenated with `tail`.
    pub fn location(&self, tail: &str) -> String {
        let mut loc = String::with_capacity(self.base_url.len() + tail.len());
        loc.push_str(&self.base_url);
        loc.push_str(tail);
        loc
    }

    /// Write `<root xmlns="...">body</root>` to `name` in the output directory.
    ///
    /// Exactly one attempt is made. On failure the temporary file is removed
    /// and the error names the final path.
    pub(crate) fn write_document<F>(&self, name: &str, root: &str, body: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut XmlWriter) -> io::Result<()>,
    {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!(".{name}.tmp"));

        let written = self
            .write_file(&tmp, root, body)
            .and_then(|()| fs::rename(&tmp, &path));

        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(SitemapError::Write(path, err));
        }
        Ok(path)
    }

    fn write_file<F>(&self, path: &Path, root: &str, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut XmlWriter) -> io::Result<()>,
    {
        let file = BufWriter::new(File::create(path)?);
        let mut writer = if self.minify {
            Writer::new(file)
        } else {
            Writer::new_with_indent(file, b' ', 2)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new(root).with_attributes([("xmlns", SITEMAP_NS)]),
        ))?;
        body(&mut writer)?;
        writer.write_event(Event::End(BytesEnd::new(root)))?;

        let mut file = writer.into_inner();
        file.write_all(b"\n")?;
        file.flush()
    }
}

/// Write `<tag>text</tag>`, escaping `text` as XML character data.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

//! Generation context: the map -> index flush cascade.
//!
//! A [`Context`] owns one open map and one open index. Every [`Context::add`]
//! may trigger the cascade:
//!
//! ```text
//! add(item) ─► map full? ─► flush s<N>.xml ─► index.add ─► index full? ─► flush i<M>.xml
//! close()   ─► map non-empty? ─► flush ─► index.add ─► index non-empty? ─► flush
//! ```
//!
//! A map's reference always lands in an index written at or after the map,
//! so no index ever points at a file that does not exist yet.

use super::error::{Result, SitemapError};
use super::index::IndexBuilder;
use super::item::Item;
use super::map::MapBuilder;
use super::output::Output;
use super::{DEFAULT_PER_INDEX, DEFAULT_PER_MAP};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scratch file created and removed to prove the output directory is writable.
const WRITE_CHECK: &str = ".sitemaps-write-check";

/// Construction parameters, fixed for the lifetime of a [`Context`].
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Existing, writable directory receiving all files (flat).
    pub output_dir: PathBuf,
    /// Absolute URL ending with `/`, prefixed to paths and file names.
    pub base_url: String,
    /// Maximum items per sitemap file.
    pub per_map: NonZeroUsize,
    /// Maximum sitemap references per index file.
    pub per_index: NonZeroUsize,
    /// Write documents without indentation.
    pub minify: bool,
}

impl ContextOptions {
    pub fn new(output_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_url: base_url.into(),
            per_map: DEFAULT_PER_MAP,
            per_index: DEFAULT_PER_INDEX,
            minify: false,
        }
    }

    pub fn with_capacity(mut self, per_map: NonZeroUsize, per_index: NonZeroUsize) -> Self {
        self.per_map = per_map;
        self.per_index = per_index;
        self
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    fn validate(&self) -> Result<()> {
        let dir = &self.output_dir;
        let meta = fs::metadata(dir).map_err(|_| {
            SitemapError::Config(format!("output directory `{}` does not exist", dir.display()))
        })?;
        if !meta.is_dir() {
            return Err(SitemapError::Config(format!(
                "output path `{}` is not a directory",
                dir.display()
            )));
        }
        let check = dir.join(WRITE_CHECK);
        if let Err(err) = fs::File::create(&check).and_then(|_| fs::remove_file(&check)) {
            return Err(SitemapError::Config(format!(
                "output directory `{}` is not writable: {err}",
                dir.display()
            )));
        }

        if let Err(err) = url::Url::parse(&self.base_url) {
            return Err(SitemapError::Config(format!(
                "base URL `{}` is invalid: {err}",
                self.base_url
            )));
        }
        if !self.base_url.ends_with('/') {
            return Err(SitemapError::Config(format!(
                "base URL `{}` must end with `/`",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Counts of everything a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub items: usize,
    pub maps: usize,
    pub indexes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Collecting,
    Closed,
    /// A flush failed; counters and buffers are no longer trustworthy.
    Failed,
}

/// How far a cascade step drains the open builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drain {
    /// Flush only builders that reached capacity.
    Full,
    /// Flush every non-empty builder.
    All,
}

/// Single-owner generation run.
#[derive(Debug)]
pub struct Context {
    output: Output,
    map: MapBuilder,
    index: IndexBuilder,
    items: usize,
    state: State,
}

impl Context {
    pub fn new(options: ContextOptions) -> Result<Self> {
        options.validate()?;
        let ContextOptions {
            output_dir,
            base_url,
            per_map,
            per_index,
            minify,
        } = options;

        Ok(Self {
            output: Output::new(output_dir, base_url, minify),
            map: MapBuilder::new(per_map),
            index: IndexBuilder::new(per_index),
            items: 0,
            state: State::Collecting,
        })
    }

    /// Create a context, add every item, and close it.
    pub fn generate<I>(options: ContextOptions, items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut ctx = Self::new(options)?;
        for item in items {
            ctx.add(item)?;
        }
        ctx.close()?;
        Ok(ctx)
    }

    /// Accept one item, flushing the map (and index) when they fill up.
    pub fn add(&mut self, item: impl Into<Item>) -> Result<()> {
        self.ensure_collecting()?;
        let item = item.into();
        item.validate()?;

        self.map.add(item)?;
        self.items += 1;
        self.cascade(Drain::Full)
    }

    /// Drain the partial map and index, then reject further mutation.
    pub fn close(&mut self) -> Result<Summary> {
        self.ensure_collecting()?;
        self.cascade(Drain::All)?;
        self.state = State::Closed;
        Ok(self.summary())
    }

    fn ensure_collecting(&self) -> Result<()> {
        match self.state {
            State::Collecting => Ok(()),
            State::Closed => Err(SitemapError::State("context is already closed")),
            State::Failed => Err(SitemapError::State(
                "context is unusable after a failed write",
            )),
        }
    }

    fn cascade(&mut self, drain: Drain) -> Result<()> {
        let result = self.step(drain);
        if result.is_err() {
            self.state = State::Failed;
        }
        result
    }

    fn step(&mut self, drain: Drain) -> Result<()> {
        let flush_map = match drain {
            Drain::Full => self.map.is_full(),
            Drain::All => !self.map.is_empty(),
        };
        if flush_map {
            let name = self.map.flush(&self.output)?;
            self.index.add(name)?;
        }

        let flush_index = match drain {
            Drain::Full => self.index.is_full(),
            Drain::All => !self.index.is_empty(),
        };
        if flush_index {
            self.index.flush(&self.output)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            items: self.items,
            maps: self.map.flushed(),
            indexes: self.index.flushed(),
        }
    }

    /// Number of sitemap files written so far.
    pub fn map_count(&self) -> usize {
        self.map.flushed()
    }

    /// Number of index files written so far.
    pub fn index_count(&self) -> usize {
        self.index.flushed()
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    pub fn base_url(&self) -> &Arc<str> {
        self.output.base_url()
    }

    pub fn output_dir(&self) -> &Path {
        self.output.dir()
    }
}

//! Item input parsing (JSON Lines or bare paths).

use anyhow::{Context, Result};
use sitemaps::sitemap::Item;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the item source: a file, or stdin for `None` / `-`.
pub fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match input {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) if path == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Parse one input line.
///
/// Blank lines and `#` comments yield `None`. A line starting with `{` must
/// be a JSON item object; anything else is taken as a bare path.
pub fn parse_line(line: &str) -> Result<Option<Item>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.starts_with('{') {
        let item = serde_json::from_str(line).context("invalid JSON item")?;
        return Ok(Some(item));
    }
    Ok(Some(Item::new(line)))
}

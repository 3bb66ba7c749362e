//! `build` command: items in, sitemaps and `Sitemap:` lines out.

use super::BuildArgs;
use super::input::{open_input, parse_line};
use crate::config::SitemapsConfig;
use anyhow::{Context as _, Result};
use sitemaps::log;
use sitemaps::sitemap::{Context, ContextOptions, Summary, sitemap_lines};
use sitemaps::utils::plural::plural_count;
use std::fs;
use std::io::{self, BufRead, Write};

/// Run the build command with the loaded configuration.
pub fn run_build(args: &BuildArgs, config: &SitemapsConfig) -> Result<()> {
    let options = config.context_options()?;
    if args.create_dir {
        fs::create_dir_all(&options.output_dir).with_context(|| {
            format!("Failed to create {}", options.output_dir.display())
        })?;
    }

    let input = open_input(args.input.as_deref())?;
    let summary = generate(input, options, &mut io::stdout().lock())?;

    log!(
        "build";
        "{} -> {}, {}",
        plural_count(summary.items, "url"),
        plural_count(summary.maps, "sitemap"),
        plural_count(summary.indexes, "index file")
    );
    Ok(())
}

/// Feed every input line through a fresh context, then write the
/// reference lines to `out`.
pub fn generate<R, W>(input: R, options: ContextOptions, out: &mut W) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut ctx = Context::new(options)?;

    for (index, line) in input.lines().enumerate() {
        let lineno = index + 1;
        let line = line.with_context(|| format!("Failed to read input line {lineno}"))?;
        let Some(item) = parse_line(&line).with_context(|| format!("input line {lineno}"))?
        else {
            continue;
        };
        ctx.add(item).with_context(|| format!("input line {lineno}"))?;
    }

    let summary = ctx.close().with_context(|| {
        format!("Failed to finish sitemaps in {}", ctx.output_dir().display())
    })?;

    for line in sitemap_lines(&ctx)? {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use tempfile::TempDir;

    const BASE_URL: &str = "https://example.com/sitemaps/";

    fn options(tmp: &TempDir) -> ContextOptions {
        let five = NonZeroUsize::new(5).unwrap();
        ContextOptions::new(tmp.path(), BASE_URL).with_capacity(five, five)
    }

    #[test]
    fn test_generate_mixed_input() {
        let tmp = TempDir::new().unwrap();
        let mut input = String::from("# items\n\n");
        for i in 0..30 {
            if i % 2 == 0 {
                input.push_str(&format!("page/{i}/\n"));
            } else {
                input.push_str(&format!(
                    "{{\"path\": \"page/{i}/\", \"changefreq\": \"weekly\", \"priority\": 0.5}}\n"
                ));
            }
        }

        let mut out = Vec::new();
        let summary = generate(input.as_bytes(), options(&tmp), &mut out).unwrap();

        assert_eq!(
            summary,
            Summary {
                items: 30,
                maps: 6,
                indexes: 2
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Sitemap: {BASE_URL}i1.xml\nSitemap: {BASE_URL}i2.xml\n")
        );
        let s1 = fs::read_to_string(tmp.path().join("s1.xml")).unwrap();
        assert!(s1.contains("<loc>https://example.com/sitemaps/page/0/</loc>"));
        assert!(s1.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_generate_empty_input() {
        let tmp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let summary = generate(&b""[..], options(&tmp), &mut out).unwrap();

        assert_eq!(summary, Summary::default());
        assert!(out.is_empty());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_reports_line_number() {
        let tmp = TempDir::new().unwrap();
        let input = "a/\n{\"path\": \"b/\", \"priority\": 3}\n";
        let err = generate(input.as_bytes(), options(&tmp), &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("input line 2"));
    }
}

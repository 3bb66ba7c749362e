//! Pluralization for log summaries.

/// `""` for exactly one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count with noun, e.g. `1 url` or `3 sitemaps`. Only regular plurals.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "url"), "0 urls");
        assert_eq!(plural_count(1, "url"), "1 url");
        assert_eq!(plural_count(5, "sitemap"), "5 sitemaps");
    }
}

//! Paginated sitemap and sitemap-index generation.
//!
//! Turns a stream of URL records into `s<N>.xml` sitemaps capped at a fixed
//! number of urls, groups those into `i<M>.xml` sitemap indexes capped at a
//! fixed number of sitemaps, and emits the `Sitemap:` lines that announce the
//! indexes in `robots.txt`.
//!
//! See [`sitemap`] for the generation API.

pub mod logger;
pub mod sitemap;
pub mod utils;

//! Configuration management for `sitemaps.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error.rs    # ConfigError, ConfigDiagnostics
//! ├── section.rs  # [sitemap]
//! ├── util.rs     # Config file discovery, path normalization
//! └── mod.rs      # SitemapsConfig (this file)
//! ```
//!
//! Values come from the config file (optional) and are overridden by CLI
//! flags. Relative paths resolve against the config file's directory, or
//! the current directory when no config file exists.

mod error;
mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};

use crate::cli::{BuildArgs, Cli, Commands};
use anyhow::{Context, Result};
use section::SitemapSection;
use serde::{Deserialize, Serialize};
use sitemaps::log;
use sitemaps::sitemap::ContextOptions;
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
use util::{find_config_file, normalize_path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemaps.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapsConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Sitemap generation settings
    #[serde(default)]
    pub sitemap: SitemapSection,
}

impl SitemapsConfig {
    /// Load configuration for the parsed command line.
    ///
    /// A missing config file is fine as long as the CLI supplies what the
    /// defaults lack (at minimum `--base-url`).
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(normalize_path).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: normalize_path(Path::new(".")),
                ..Self::default()
            },
        };

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { args } => self.apply_build_args(args),
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        let sitemap = &mut self.sitemap;
        Self::update_option(&mut sitemap.output, args.output.as_ref());
        Self::update_option(&mut sitemap.per_map, args.per_map.as_ref());
        Self::update_option(&mut sitemap.per_index, args.per_index.as_ref());
        Self::update_option(&mut sitemap.minify, args.minify.as_ref());
        if let Some(url) = &args.base_url {
            sitemap.base_url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the output directory against the root.
    fn normalize_paths(&mut self) {
        self.sitemap.output = normalize_path(&self.root.join(&self.sitemap.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.sitemap.validate(&mut diag);
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Generation options for a [`sitemaps::sitemap::Context`].
    ///
    /// Only meaningful after [`SitemapsConfig::validate`] succeeded.
    pub fn context_options(&self) -> Result<ContextOptions> {
        let section = &self.sitemap;
        let base_url = section
            .base_url
            .clone()
            .context("sitemap.base_url is not set")?;
        let per_map = NonZeroUsize::new(section.per_map).context("sitemap.per_map must be > 0")?;
        let per_index =
            NonZeroUsize::new(section.per_index).context("sitemap.per_index must be > 0")?;

        Ok(ContextOptions::new(&section.output, base_url)
            .with_capacity(per_map, per_index)
            .with_minify(section.minify))
    }
}

// ============================================================================
// tests
// ============================================================================

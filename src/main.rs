//! sitemaps - paginated sitemap and sitemap-index generator.

mod cli;
mod config;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SitemapsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitemaps::logger::set_verbose(cli.verbose);

    let config = SitemapsConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        sitemaps::debug!("config"; "using {}", path.display());
    }

    match &cli.command {
        Commands::Build { args } => cli::build::run_build(args, &config),
    }
}

//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Paginated sitemap generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemaps.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitemaps.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output (one line per written file)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate sitemaps and indexes, then print `Sitemap:` lines for robots.txt
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// JSON Lines file of items; a line that is not a JSON object is a bare path.
    /// Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output directory for sitemap and index files
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Public URL of the output directory, ending with `/`
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Maximum urls per sitemap file
    #[arg(long)]
    pub per_map: Option<usize>,

    /// Maximum sitemaps per index file
    #[arg(long)]
    pub per_index: Option<usize>,

    /// Write documents without indentation
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub create_dir: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["sitemaps", "build"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("sitemaps.toml"));
        assert!(!cli.verbose);
        let Commands::Build { args } = cli.command;
        assert!(args.input.is_none());
        assert!(args.minify.is_none());
        assert!(!args.create_dir);
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "sitemaps",
            "-v",
            "b",
            "items.jsonl",
            "-o",
            "out",
            "-U",
            "https://example.com/",
            "--per-map",
            "5",
            "--per-index",
            "7",
            "-m",
            "false",
            "--create-dir",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Build { args } = cli.command;
        assert_eq!(args.input, Some(PathBuf::from("items.jsonl")));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.base_url.as_deref(), Some("https://example.com/"));
        assert_eq!((args.per_map, args.per_index), (Some(5), Some(7)));
        assert_eq!(args.minify, Some(false));
        assert!(args.create_dir);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_keep_version_and_verbose_apart() {
        let err = Cli::try_parse_from(["sitemaps", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::try_parse_from(["sitemaps", "build", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["sitemaps"]).is_err());
    }
}

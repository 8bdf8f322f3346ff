//! snippet-review CLI tool.
//!
//! Usage:
//! ```bash
//! snippet-review check [OPTIONS] [PATH]
//! snippet-review detect [PATH]
//! snippet-review list-rules
//! snippet-review init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use snippet_review::rules::Preset;
use snippet_review::Dialect;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Heuristic reviewer for C#, VB.NET, and SQL snippets
#[derive(Parser)]
#[command(name = "snippet-review")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SNIPPET_REVIEW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a snippet
    Check {
        /// File to review (default: stdin, also `-`)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Force the dialect instead of detecting it (csharp, vbnet, sql, unknown)
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Rule preset (full, rules-only, minimal)
        #[arg(short, long)]
        preset: Option<Preset>,
    },

    /// Print the detected dialect of a snippet
    Detect {
        /// File to inspect (default: stdin, also `-`)
        path: Option<PathBuf>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for review results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console report with summary, language, and numbered issues.
    #[default]
    Text,
    /// JSON object with `summary`, `language`, and `issues`.
    Json,
    /// One line per issue.
    Compact,
    /// Rich diagnostics pointing into the snippet.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            dialect,
            preset,
        } => {
            let source = config_resolver::resolve(
                &std::env::current_dir()?,
                cli.config.as_deref(),
            );
            let options = commands::check::Options {
                format,
                dialect,
                preset,
            };
            commands::check::run(path.as_deref(), &options, &source)
        }
        Commands::Detect { path } => commands::detect::run(path.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}

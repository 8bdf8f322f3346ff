//! Check command implementation.

use anyhow::{Context, Result};
use snippet_review::rules::Preset;
use snippet_review::{detect, Dialect};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line switches for `check`.
pub struct Options {
    /// Report format.
    pub format: OutputFormat,
    /// Forced dialect, overriding detection and configuration.
    pub dialect: Option<Dialect>,
    /// Preset overriding the configured one.
    pub preset: Option<Preset>,
}

/// Runs the check command.
pub fn run(path: Option<&Path>, options: &Options, source: &ConfigSource) -> Result<()> {
    let mut config = source.load()?;

    if let Some(dialect) = options.dialect {
        config.analyzer.dialect = Some(dialect);
    }
    if let Some(preset) = options.preset {
        config.preset = Some(preset.name().to_string());
    }

    let text = super::read_input(path)?;
    if text.trim().is_empty() {
        eprintln!("No code provided. Pass a file path or pipe code via stdin.");
        return Ok(());
    }

    let dialect = config.analyzer.dialect.unwrap_or_else(|| detect(&text));

    let analyzer =
        snippet_review::analyzer_with(config).context("Failed to configure analyzer")?;

    tracing::info!("Reviewing {} snippet with {} rules", dialect, analyzer.rule_count());

    let result = analyzer.analyze(&text, dialect);

    super::output::print(&text, dialect, &result, options.format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

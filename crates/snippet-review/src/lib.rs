//! # snippet-review
//!
//! Heuristic reviewer for short C#, VB.NET, and SQL snippets.
//!
//! This is the main facade crate that re-exports core functionality and rules
//! and wires them into the two boundary operations, [`detect`] and
//! [`analyze`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let code = "DELETE FROM Orders";
//! let dialect = snippet_review::detect(code);
//! let result = snippet_review::analyze(code, dialect);
//!
//! assert_eq!(result.summary, "Deletes records from Orders.");
//! assert!(result.has_errors());
//! ```
//!
//! ## Configured Usage
//!
//! ```rust,ignore
//! use snippet_review::Config;
//!
//! let config = Config::from_file("snippet-review.toml")?;
//! let analyzer = snippet_review::analyzer_with(config)?;
//! let result = analyzer.analyze_detected(code);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use snippet_review_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use snippet_review_rules::*;
}

use snippet_review_rules::{configured_rules, Preset, SummaryGenerator, UnknownPreset};

/// Reviews `text` as `dialect` with every built-in rule at default settings.
///
/// Total: any string and any dialect yield a well-formed result.
#[must_use]
pub fn analyze(text: &str, dialect: Dialect) -> AnalysisResult {
    Analyzer::builder()
        .rules(Preset::Full.rules())
        .summarizer(SummaryGenerator::new())
        .build()
        .analyze(text, dialect)
}

/// Builds an analyzer from configuration: the configured preset, per-rule
/// thresholds, enable flags, and severity overrides.
///
/// # Errors
///
/// Returns an error if the configuration names an unknown preset.
pub fn analyzer_with(config: Config) -> Result<Analyzer, UnknownPreset> {
    let rules = configured_rules(&config)?;
    tracing::debug!("Configured {} rules", rules.len());
    Ok(Analyzer::builder()
        .rules(rules)
        .summarizer(SummaryGenerator::new())
        .config(config)
        .build())
}

//! # snippet-review-core
//!
//! Core framework for reviewing short source snippets of unknown origin.
//!
//! This crate provides the foundational types and traits the rule crate builds
//! on. It includes:
//!
//! - [`detect`] for classifying a snippet into a [`Dialect`]
//! - [`Rule`] trait for line-oriented heuristic checks
//! - [`Summarizer`] trait for the one-sentence intent summary
//! - [`Analyzer`] for orchestrating a review into an [`AnalysisResult`]
//! - [`scan`] with the brace/keyword depth tracking shared by rules
//!
//! Nothing in here builds a parse tree. Every check is a pass over lines or
//! characters, and malformed input is reviewed as well as it can be.
//!
//! ## Example
//!
//! ```ignore
//! use snippet_review_core::{detect, Analyzer};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .summarizer(MySummarizer)
//!     .build();
//!
//! let code = "DELETE FROM Orders";
//! let result = analyzer.analyze(code, detect(code));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod detect;
mod rule;
mod summary;
mod types;

/// Structural scanning primitives (depth tracking and boundary detection).
pub mod scan;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::SnippetContext;
pub use detect::detect;
pub use rule::{Rule, RuleBox, RuleFamily, Summarizer, SummarizerBox};
pub use summary::{finalize_summary, DEFAULT_SUMMARY, MAX_SUMMARY_LEN};
pub use types::{
    AnalysisResult, Dialect, Issue, IssueDiagnostic, ParseDialectError, Severity,
};

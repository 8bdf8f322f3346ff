//! Rule to flag literals repeated across the snippet.
//!
//! # Rationale
//!
//! A magic number or string copied onto several lines drifts the first time
//! someone edits only one copy.
//!
//! # Detected Patterns
//!
//! - String literals: double-quoted, or single-quoted for SQL. Compared
//!   ignoring case; empty strings are skipped.
//! - Numeric literals (`42`, `0.05`) outside string literals.
//!
//! A literal is reported once, at its first line, when it occurs on at least
//! `min_lines` distinct lines. The message carries the total occurrence
//! count. Issues follow first-occurrence order.
//!
//! # Configuration
//!
//! - `min_lines`: Distinct lines needed to report (default: 3)

use regex::Regex;
use snippet_review_core::scan::compile;
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Rule name for the repeated-literal smell.
pub const NAME: &str = "Smell.RepeatedLiteral";

/// Default distinct lines needed to report a literal.
pub const DEFAULT_MIN_LINES: usize = 3;

static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| compile(r#""([^"]*)""#));

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| compile(r"'([^']*)'"));

static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\b\d+(?:\.\d+)?\b"));

/// Strings and numbers never share a key, so `"42"` and `42` stay apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LiteralKey {
    Text(String),
    Number(String),
}

#[derive(Debug)]
struct Occurrences {
    display: String,
    lines: Vec<usize>,
}

impl Occurrences {
    fn distinct_lines(&self) -> usize {
        let mut lines = self.lines.clone();
        lines.dedup();
        lines.len()
    }
}

/// Flags literals that recur on several lines.
#[derive(Debug, Clone)]
pub struct RepeatedLiteral {
    min_lines: usize,
}

impl Default for RepeatedLiteral {
    fn default() -> Self {
        Self::new()
    }
}

impl RepeatedLiteral {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_lines: DEFAULT_MIN_LINES,
        }
    }

    /// Sets how many distinct lines a literal must appear on.
    #[must_use]
    pub fn min_lines(mut self, min: usize) -> Self {
        self.min_lines = min;
        self
    }
}

impl Rule for RepeatedLiteral {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Smell
    }

    fn applies_to(&self, _dialect: Dialect) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "Flags string and numeric literals repeated on three or more lines"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let strings: &Regex = if ctx.dialect() == Dialect::Sql {
            &SINGLE_QUOTED
        } else {
            &DOUBLE_QUOTED
        };

        let mut order: Vec<LiteralKey> = Vec::new();
        let mut seen: HashMap<LiteralKey, Occurrences> = HashMap::new();
        let mut record = |key: LiteralKey, display: &str, line: usize| {
            seen.entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Occurrences {
                        display: display.to_string(),
                        lines: Vec::new(),
                    }
                })
                .lines
                .push(line);
        };

        for (n, line) in ctx.numbered_lines() {
            let mut spans = Vec::new();
            for caps in strings.captures_iter(line) {
                if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
                    spans.push(whole.range());
                    if !inner.as_str().is_empty() {
                        record(LiteralKey::Text(inner.as_str().to_lowercase()), inner.as_str(), n);
                    }
                }
            }
            for m in NUMBER.find_iter(line) {
                if spans.iter().any(|s| s.contains(&m.start())) {
                    continue;
                }
                record(LiteralKey::Number(m.as_str().to_string()), m.as_str(), n);
            }
        }

        order
            .iter()
            .filter_map(|key| seen.get(key))
            .filter(|occ| occ.distinct_lines() >= self.min_lines)
            .map(|occ| {
                Issue::new(
                    NAME,
                    Severity::Info,
                    format!("Literal '{}' appears {} times.", occ.display, occ.lines.len()),
                )
                .at_line(occ.lines[0])
                .with_suggestion("Extract to a constant or parameter to improve maintainability.")
            })
            .collect()
    }
}

//! Rule to flag C# methods with too many `if` statements.
//!
//! # Rationale
//!
//! A method that branches many times is hard to follow and to test. Guard
//! clauses or a dispatch table usually flatten it.
//!
//! # Detected Patterns
//!
//! Every whole-word `if` between the method header and the line where its
//! braces balance counts, including those in nested lambdas and local
//! functions. `else if` counts once. Bodies that never close are skipped.
//!
//! # Configuration
//!
//! - `max_ifs`: Maximum `if` tokens per method (default: 2)

use snippet_review_core::scan::{count_words, csharp_methods};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the nested-ifs check.
pub const NAME: &str = "CSharp.NestedIfs";

/// Default maximum `if` tokens per method.
pub const DEFAULT_MAX_IFS: usize = 2;

/// Flags methods containing more than a fixed number of `if` tokens.
#[derive(Debug, Clone)]
pub struct CSharpNestedIfs {
    max_ifs: usize,
}

impl Default for CSharpNestedIfs {
    fn default() -> Self {
        Self::new()
    }
}

impl CSharpNestedIfs {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_ifs: DEFAULT_MAX_IFS,
        }
    }

    /// Sets the maximum number of `if` tokens per method.
    #[must_use]
    pub fn max_ifs(mut self, max: usize) -> Self {
        self.max_ifs = max;
        self
    }
}

impl Rule for CSharpNestedIfs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Dialect
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        dialect == Dialect::CSharp
    }

    fn description(&self) -> &'static str {
        "Flags methods with more than two if statements"
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let lines = ctx.lines();
        csharp_methods(lines)
            .into_iter()
            .filter(|m| m.closed)
            .filter_map(|m| {
                let ifs: usize = lines[m.start - 1..m.end]
                    .iter()
                    .map(|l| count_words(l, "if"))
                    .sum();
                (ifs > self.max_ifs).then(|| {
                    Issue::new(
                        NAME,
                        Severity::Warning,
                        format!(
                            "Method contains more than {} 'if' statements (found {ifs}).",
                            spelled(self.max_ifs)
                        ),
                    )
                    .at_line(m.end)
                    .with_suggestion("Consider refactoring (guard clauses, strategy, or early returns).")
                })
            })
            .collect()
    }
}

/// Spells small limits out the way the message reads for the default.
fn spelled(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| (*w).to_string())
}

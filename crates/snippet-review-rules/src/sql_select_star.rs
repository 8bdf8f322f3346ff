//! Rule to flag `SELECT *` in SQL snippets.
//!
//! # Rationale
//!
//! Wildcard projections pull columns nobody reads and break callers when the
//! table changes shape.

use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the select-star check.
pub const NAME: &str = "SQL.SelectStar";

/// Reports every line containing `SELECT *`.
#[derive(Debug, Clone, Default)]
pub struct SqlSelectStar;

impl SqlSelectStar {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SqlSelectStar {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Dialect
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        dialect == Dialect::Sql
    }

    fn description(&self) -> &'static str {
        "Flags SELECT * projections"
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter(|(_, line)| line.to_uppercase().contains("SELECT *"))
            .map(|(n, _)| {
                Issue::new(NAME, Severity::Warning, "Usage of SELECT * detected.")
                    .at_line(n)
                    .with_suggestion(
                        "Specify explicit column names to improve performance and stability.",
                    )
            })
            .collect()
    }
}

//! Rule to flag unfiltered `DELETE` and `UPDATE` statements.
//!
//! # Rationale
//!
//! A mass mutation without a filter rewrites or removes every row. This is
//! reported as an error.
//!
//! # Detected Patterns
//!
//! Purely line-based: a line mentioning `DELETE` or `UPDATE` must also
//! mention `WHERE`. A `WHERE` on the next line is not seen.

use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the missing-where check.
pub const NAME: &str = "SQL.MissingWhere";

/// Reports `DELETE`/`UPDATE` lines lacking `WHERE`.
#[derive(Debug, Clone, Default)]
pub struct SqlMissingWhere;

impl SqlMissingWhere {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SqlMissingWhere {
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
        "Flags DELETE/UPDATE without a WHERE clause"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter(|(_, line)| {
                let upper = line.to_uppercase();
                (upper.contains("DELETE") || upper.contains("UPDATE")) && !upper.contains("WHERE")
            })
            .map(|(n, _)| {
                Issue::new(NAME, Severity::Error, "DELETE/UPDATE without WHERE clause.")
                    .at_line(n)
                    .with_suggestion("Add a WHERE clause to avoid affecting unintended rows.")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(code: &str) -> Vec<Issue> {
        let ctx = SnippetContext::new(code, Dialect::Sql);
        SqlMissingWhere::new().check(&ctx)
    }

    #[test]
    fn test_detects_delete_without_where() {
        let issues = check_code("DELETE FROM Orders");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, Some(1));
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_where_on_same_line_suppresses() {
        assert!(check_code("DELETE FROM Orders WHERE Id=1").is_empty());
        assert!(check_code("update Orders set Paid = 1 where Id = 2").is_empty());
    }

    #[test]
    fn test_where_on_next_line_is_not_seen() {
        let issues = check_code("UPDATE Orders SET Paid = 1\nWHERE Id = 2");
        assert_eq!(issues.len(), 1);
    }
}

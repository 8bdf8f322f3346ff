//! Rule to surface `NOLOCK` table hints.

use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the NOLOCK check.
pub const NAME: &str = "SQL.NoLock";

/// Reports every line containing a `NOLOCK` hint.
#[derive(Debug, Clone, Default)]
pub struct SqlNoLock;

impl SqlNoLock {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SqlNoLock {
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
        "Surfaces dirty-read NOLOCK hints"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter(|(_, line)| line.to_uppercase().contains("NOLOCK"))
            .map(|(n, _)| {
                Issue::new(NAME, Severity::Info, "WITH (NOLOCK) hint detected.")
                    .at_line(n)
                    .with_suggestion(
                        "Be aware NOLOCK can read uncommitted data; consider SNAPSHOT isolation or proper indexing.",
                    )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_nolock() {
        let ctx = SnippetContext::new("SELECT Id FROM Orders WITH (nolock)", Dialect::Sql);
        let issues = SqlNoLock::new().check(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }
}

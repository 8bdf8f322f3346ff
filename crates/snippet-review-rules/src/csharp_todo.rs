//! Rule to surface TODO markers in C# snippets.
//!
//! Matching is a case-insensitive substring test, so `todo`, `TODO:` and
//! `// ToDo` all count.

use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the TODO check.
pub const NAME: &str = "CSharp.TODO";

/// Reports every line holding a TODO marker.
#[derive(Debug, Clone, Default)]
pub struct CSharpTodo;

impl CSharpTodo {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CSharpTodo {
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
        "Surfaces TODO comments"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter(|(_, line)| line.to_lowercase().contains("todo"))
            .map(|(n, _)| {
                Issue::new(NAME, Severity::Info, "TODO comment found.")
                    .at_line(n)
                    .with_suggestion("Resolve or track the TODO with an issue.")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_todo_any_case() {
        let code = "// todo: fix\nint x = 1;\n// TODO later";
        let ctx = SnippetContext::new(code, Dialect::CSharp);
        let lines: Vec<_> = CSharpTodo::new()
            .check(&ctx)
            .iter()
            .map(|i| i.line_number)
            .collect();
        assert_eq!(lines, [Some(1), Some(3)]);
    }

    #[test]
    fn test_ignores_clean_code() {
        let ctx = SnippetContext::new("int total = 0;", Dialect::CSharp);
        assert!(CSharpTodo::new().check(&ctx).is_empty());
    }
}

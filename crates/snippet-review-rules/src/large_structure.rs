//! Rule to flag oversized classes and procedures.
//!
//! Classes (C#, VB.NET) are measured by line span and method count, SQL
//! procedures by line span alone. The span is the closing line minus the
//! header line, so an unclosed body is measured to the end of the snippet.
//!
//! # Configuration
//!
//! - `max_lines`: Longest allowed span (default: 300)
//! - `max_methods`: Most methods allowed per class (default: 10)

use snippet_review_core::scan::{csharp_classes, sql_procedures, vb_classes};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the large-structure smell.
pub const NAME: &str = "Smell.LargeStructure";

/// Kind emitted for an oversized class.
pub const LARGE_CLASS: &str = "Smell.LargeClass";

/// Kind emitted for an oversized SQL procedure.
pub const LARGE_PROCEDURE: &str = "Smell.LargeProcedure";

/// Default longest allowed span in lines.
pub const DEFAULT_MAX_LINES: usize = 300;

/// Default most methods per class.
pub const DEFAULT_MAX_METHODS: usize = 10;

/// Flags classes and procedures that grew too large.
#[derive(Debug, Clone)]
pub struct LargeStructure {
    max_lines: usize,
    max_methods: usize,
}

impl Default for LargeStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl LargeStructure {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_methods: DEFAULT_MAX_METHODS,
        }
    }

    /// Sets the longest allowed span.
    #[must_use]
    pub fn max_lines(mut self, max: usize) -> Self {
        self.max_lines = max;
        self
    }

    /// Sets the most methods allowed per class.
    #[must_use]
    pub fn max_methods(mut self, max: usize) -> Self {
        self.max_methods = max;
        self
    }
}

impl Rule for LargeStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Smell
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        dialect != Dialect::Unknown
    }

    fn description(&self) -> &'static str {
        "Flags classes over 300 lines or 10 methods and procedures over 300 lines"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let lines = ctx.lines();
        match ctx.dialect() {
            Dialect::CSharp | Dialect::VbNet => {
                let classes = if ctx.dialect() == Dialect::CSharp {
                    csharp_classes(lines)
                } else {
                    vb_classes(lines)
                };
                classes
                    .into_iter()
                    .filter(|c| c.span() > self.max_lines || c.methods > self.max_methods)
                    .map(|c| {
                        Issue::new(
                            LARGE_CLASS,
                            Severity::Info,
                            format!(
                                "Class '{}' spans {} lines and has {} methods.",
                                c.name,
                                c.span(),
                                c.methods
                            ),
                        )
                        .at_line(c.start)
                        .with_suggestion("Split into smaller classes or reduce responsibilities.")
                    })
                    .collect()
            }
            Dialect::Sql => sql_procedures(lines)
                .into_iter()
                .filter(|p| p.span() > self.max_lines)
                .map(|p| {
                    Issue::new(
                        LARGE_PROCEDURE,
                        Severity::Info,
                        format!("Procedure/Function '{}' spans {} lines.", p.name, p.span()),
                    )
                    .at_line(p.start)
                    .with_suggestion("Break into smaller procedures or review logic size.")
                })
                .collect(),
            Dialect::Unknown => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: &str, dialect: Dialect) -> Vec<Issue> {
        let ctx = SnippetContext::new(code, dialect);
        LargeStructure::new().check(&ctx)
    }

    #[test]
    fn test_detects_class_with_many_methods() {
        let mut code = String::from("public class Repo {\n");
        for i in 0..11 {
            code.push_str(&format!("  public void Load{i}() {{ }}\n"));
        }
        code.push('}');

        let issues = check(&code, Dialect::CSharp);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, LARGE_CLASS);
        assert_eq!(
            issues[0].message,
            "Class 'Repo' spans 12 lines and has 11 methods."
        );
    }

    #[test]
    fn test_detects_long_vbnet_class() {
        let body = "  x = 1\n".repeat(301);
        let code = format!("Public Class Report\n{body}End Class");
        let issues = check(&code, Dialect::VbNet);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, Some(1));
        assert!(issues[0].message.contains("spans 302 lines"));
    }

    #[test]
    fn test_detects_long_sql_procedure() {
        let body = "  SELECT 1;\n".repeat(301);
        let code = format!("CREATE PROCEDURE Nightly AS\nBEGIN\n{body}END");
        let issues = check(&code, Dialect::Sql);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, LARGE_PROCEDURE);
        assert_eq!(issues[0].message, "Procedure/Function 'Nightly' spans 303 lines.");
    }

    #[test]
    fn test_small_class_passes() {
        let issues = check("class Tiny {\n void Run() { }\n}", Dialect::CSharp);
        assert!(issues.is_empty());
    }
}

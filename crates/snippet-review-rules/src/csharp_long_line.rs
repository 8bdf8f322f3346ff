//! Rule to flag overlong C# lines.
//!
//! # Rationale
//!
//! Lines that run past the editor width hide code off-screen and usually
//! mean an expression is doing too much.
//!
//! # Configuration
//!
//! - `max_length`: Maximum characters per line (default: 120)

use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the long-line check.
pub const NAME: &str = "CSharp.LongLine";

/// Default maximum line length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 120;

/// Flags C# lines longer than a character limit.
#[derive(Debug, Clone)]
pub struct CSharpLongLine {
    max_length: usize,
    severity: Severity,
}

impl Default for CSharpLongLine {
    fn default() -> Self {
        Self::new()
    }
}

impl CSharpLongLine {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            severity: Severity::Warning,
        }
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for CSharpLongLine {
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
        "Flags lines longer than 120 characters"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter_map(|(n, line)| {
                let len = line.chars().count();
                (len > self.max_length).then(|| {
                    Issue::new(
                        NAME,
                        self.severity,
                        format!(
                            "Line exceeds {} characters ({len}).",
                            self.max_length
                        ),
                    )
                    .at_line(n)
                    .with_suggestion("Wrap or refactor to reduce line length.")
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(code: &str) -> Vec<Issue> {
        let ctx = SnippetContext::new(code, Dialect::CSharp);
        CSharpLongLine::new().check(&ctx)
    }

    #[test]
    fn test_detects_121_characters() {
        let code = format!("int x = 1;\n{}", "a".repeat(121));
        let issues = check_code(&code);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, Some(2));
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "Line exceeds 120 characters (121).");
    }

    #[test]
    fn test_allows_exactly_120_characters() {
        assert!(check_code(&"a".repeat(120)).is_empty());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(check_code(&"é".repeat(100)).is_empty());
    }

    #[test]
    fn test_custom_limit() {
        let ctx = SnippetContext::new("abcdef", Dialect::CSharp);
        let issues = CSharpLongLine::new().max_length(5).check(&ctx);
        assert_eq!(issues[0].message, "Line exceeds 5 characters (6).");
    }
}

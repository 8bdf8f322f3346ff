//! Rule to flag `GoTo` in VB.NET snippets.

use regex::Regex;
use snippet_review_core::scan::compile;
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};
use std::sync::LazyLock;

/// Rule name for the GoTo check.
pub const NAME: &str = "VBNet.GoTo";

static GOTO: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bGoTo\b"));

/// Reports every line using `GoTo`.
#[derive(Debug, Clone, Default)]
pub struct VbNetGoTo;

impl VbNetGoTo {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for VbNetGoTo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Dialect
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        dialect == Dialect::VbNet
    }

    fn description(&self) -> &'static str {
        "Flags unstructured GoTo jumps"
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        ctx.numbered_lines()
            .filter(|(_, line)| GOTO.is_match(line))
            .map(|(n, _)| {
                Issue::new(NAME, Severity::Warning, "Usage of 'GoTo' found.")
                    .at_line(n)
                    .with_suggestion(
                        "Avoid GoTo; use structured control flow (If/Else, Select Case, loops).",
                    )
            })
            .collect()
    }
}

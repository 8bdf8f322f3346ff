//! Rule and summarizer traits.

use crate::context::SnippetContext;
use crate::types::{Dialect, Issue, Severity};

/// Family a rule belongs to. Families run in declaration order, so every
/// dialect issue precedes every naming issue, which precedes every smell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleFamily {
    /// Fixed per-dialect rules (`CSharp.*`, `VBNet.*`, `SQL.*`).
    Dialect,
    /// Identifier quality rules (`Naming.*`).
    Naming,
    /// Cross-dialect structural smells (`Smell.*`).
    Smell,
}

impl RuleFamily {
    /// All families in execution order.
    pub const ORDER: [Self; 3] = [Self::Dialect, Self::Naming, Self::Smell];
}

impl std::fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dialect => write!(f, "dialect"),
            Self::Naming => write!(f, "naming"),
            Self::Smell => write!(f, "smell"),
        }
    }
}

/// A line-oriented heuristic check.
///
/// Implement this trait to create rules that inspect a snippet. Rules are
/// pure: the same context always yields the same issues in the same order.
///
/// # Example
///
/// ```ignore
/// use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "CSharp.Tabs" }
///     fn family(&self) -> RuleFamily { RuleFamily::Dialect }
///     fn applies_to(&self, dialect: Dialect) -> bool { dialect == Dialect::CSharp }
///
///     fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
///         ctx.numbered_lines()
///             .filter(|(_, line)| line.contains('\t'))
///             .map(|(n, _)| Issue::new(self.name(), Severity::Info, "Tab found.").at_line(n))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the dotted name of this rule (e.g., `CSharp.LongLine`).
    ///
    /// Rules that emit a single kind use that kind as their name.
    fn name(&self) -> &'static str;

    /// Returns the family this rule belongs to.
    fn family(&self) -> RuleFamily;

    /// Whether this rule runs for the given dialect.
    fn applies_to(&self, dialect: Dialect) -> bool;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for issues from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a snippet and returns any issues found, in emission order.
    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Produces the one-sentence intent summary of a snippet.
///
/// The analyzer finalizes whatever is returned (see
/// [`finalize_summary`](crate::finalize_summary)), so implementations may
/// return a rough sentence.
pub trait Summarizer: Send + Sync {
    /// Describes what the snippet likely does.
    fn summarize(&self, ctx: &SnippetContext<'_>) -> String;
}

/// Type alias for boxed Summarizer trait objects.
pub type SummarizerBox = Box<dyn Summarizer>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "Test.Rule"
        }
        fn family(&self) -> RuleFamily {
            RuleFamily::Smell
        }
        fn applies_to(&self, _dialect: Dialect) -> bool {
            true
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _ctx: &SnippetContext<'_>) -> Vec<Issue> {
            vec![Issue::new(self.name(), self.default_severity(), "Test issue").at_line(1)]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "Test.Rule");
        assert_eq!(rule.default_severity(), Severity::Warning);
        let ctx = SnippetContext::new("x", Dialect::Unknown);
        assert_eq!(rule.check(&ctx).len(), 1);
    }

    #[test]
    fn families_order_dialect_naming_smell() {
        assert!(RuleFamily::Dialect < RuleFamily::Naming);
        assert!(RuleFamily::Naming < RuleFamily::Smell);
    }
}

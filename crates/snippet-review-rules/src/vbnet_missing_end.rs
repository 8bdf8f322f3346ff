//! Rule to detect VB.NET procedures without a terminator.
//!
//! # Rationale
//!
//! A `Sub` or `Function` with no matching `End Sub`/`End Function` does not
//! compile, and in a pasted snippet it usually means the tail was cut off.
//!
//! # Detected Patterns
//!
//! Openers and terminators are totalled per kind over the whole snippet.
//! When openers outnumber terminators, one snippet-scoped issue is emitted
//! for that kind (`VBNet.MissingEndSub` or `VBNet.MissingEndFunction`).
//! `MustOverride` declarations have no body and are not openers.

use snippet_review_core::scan::{vb_procedure_end, vb_procedure_header, ProcedureKind};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name covering both terminator kinds.
pub const NAME: &str = "VBNet.MissingEnd";

/// Kind emitted for an unmatched `Sub`.
pub const MISSING_END_SUB: &str = "VBNet.MissingEndSub";

/// Kind emitted for an unmatched `Function`.
pub const MISSING_END_FUNCTION: &str = "VBNet.MissingEndFunction";

/// Reports `Sub`/`Function` openers that lack a terminator.
#[derive(Debug, Clone, Default)]
pub struct VbNetMissingEnd;

impl VbNetMissingEnd {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct Tally {
    subs: usize,
    functions: usize,
    end_subs: usize,
    end_functions: usize,
}

impl Rule for VbNetMissingEnd {
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
        "Detects Sub/Function without End Sub/End Function"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let tally = ctx.lines().iter().fold(Tally::default(), |mut t, line| {
            match vb_procedure_header(line) {
                Some((_, header)) if header.bodiless => {}
                Some((ProcedureKind::Sub, _)) => t.subs += 1,
                Some((ProcedureKind::Function, _)) => t.functions += 1,
                None => match vb_procedure_end(line) {
                    Some(ProcedureKind::Sub) => t.end_subs += 1,
                    Some(ProcedureKind::Function) => t.end_functions += 1,
                    None => {}
                },
            }
            t
        });

        let mut issues = Vec::new();
        if tally.subs > tally.end_subs {
            issues.push(
                Issue::new(
                    MISSING_END_SUB,
                    Severity::Error,
                    "Detected 'Sub' without matching 'End Sub'.",
                )
                .with_suggestion("Ensure each Sub is closed with 'End Sub'."),
            );
        }
        if tally.functions > tally.end_functions {
            issues.push(
                Issue::new(
                    MISSING_END_FUNCTION,
                    Severity::Error,
                    "Detected 'Function' without matching 'End Function'.",
                )
                .with_suggestion("Ensure each Function is closed with 'End Function'."),
            );
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_code(code: &str) -> Vec<Issue> {
        let ctx = SnippetContext::new(code, Dialect::VbNet);
        VbNetMissingEnd::new().check(&ctx)
    }

    #[test]
    fn test_detects_unmatched_sub() {
        let issues = check_code("Sub Run()\n  Console.WriteLine(1)");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, MISSING_END_SUB);
        assert_eq!(issues[0].line_number, None);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_detects_both_kinds() {
        let issues = check_code("Sub A()\nFunction B() As Integer\n");
        let kinds: Vec<_> = issues.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, [MISSING_END_SUB, MISSING_END_FUNCTION]);
    }

    #[test]
    fn test_balanced_procedures_pass() {
        let issues = check_code(
            "Public Sub A()\nEnd Sub\nPrivate Function B() As Integer\n  Return 1\nEnd Function",
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_exit_sub_is_not_an_opener() {
        let issues = check_code("Sub A()\n  Exit Sub\nEnd Sub");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_must_override_has_no_body() {
        let issues = check_code("Public MustOverride Sub Draw()");
        assert!(issues.is_empty());
    }
}

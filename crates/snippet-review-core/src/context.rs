//! Context type for rule execution.

use crate::types::{Dialect, Issue, IssueDiagnostic};

/// Context provided to rules and summarizers.
///
/// Holds the snippet split into lines together with the dialect it was
/// classified as. Constructed once per review and never mutated.
#[derive(Debug, Clone)]
pub struct SnippetContext<'a> {
    text: &'a str,
    dialect: Dialect,
    lines: Vec<&'a str>,
    line_starts: Vec<usize>,
}

impl<'a> SnippetContext<'a> {
    /// Creates a new snippet context.
    ///
    /// Lines are split on `\r\n`, `\r`, and `\n`. A trailing line break
    /// yields a trailing empty line, so line numbers match what an editor
    /// shows.
    #[must_use]
    pub fn new(text: &'a str, dialect: Dialect) -> Self {
        let (lines, line_starts) = split_lines(text);
        Self {
            text,
            dialect,
            lines,
            line_starts,
        }
    }

    /// The full snippet text.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The dialect being reviewed.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The snippet lines, without line terminators.
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Iterates `(line_number, line)` pairs with 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().enumerate().map(|(i, l)| (i + 1, *l))
    }

    /// Returns true if the snippet is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Case-insensitive substring test over the whole snippet.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.text
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Calculates the byte offset where a 1-indexed line starts.
    ///
    /// Returns 0 for line 0 and the end of the text past the last line.
    #[must_use]
    pub fn offset_for(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        self.line_starts
            .get(line - 1)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Builds a rich diagnostic whose span covers the issue's line.
    #[must_use]
    pub fn diagnostic(&self, issue: &Issue) -> IssueDiagnostic {
        match issue.line_number {
            Some(line) => {
                let length = self.lines.get(line.saturating_sub(1)).map_or(0, |l| l.len());
                IssueDiagnostic::new(issue, self.offset_for(line), length)
            }
            None => IssueDiagnostic::new(issue, 0, 0),
        }
    }
}

fn split_lines(text: &str) -> (Vec<&str>, Vec<usize>) {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut starts = vec![0];
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
                starts.push(start);
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
                starts.push(start);
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    (lines, starts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn splits_mixed_line_endings() {
        let ctx = SnippetContext::new("a\r\nb\rc\nd", Dialect::Unknown);
        assert_eq!(ctx.lines(), &["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let ctx = SnippetContext::new("a\n", Dialect::Unknown);
        assert_eq!(ctx.lines(), &["a", ""]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        let ctx = SnippetContext::new("", Dialect::Unknown);
        assert_eq!(ctx.lines(), &[""]);
        assert!(ctx.is_blank());
    }

    #[test]
    fn test_offset_calculation() {
        let ctx = SnippetContext::new("line1\r\nline2\nline3", Dialect::Unknown);
        assert_eq!(ctx.offset_for(1), 0);
        assert_eq!(ctx.offset_for(2), 7);
        assert_eq!(ctx.offset_for(3), 13);
        assert_eq!(ctx.offset_for(9), 18);
    }

    #[test]
    fn numbered_lines_are_one_based() {
        let ctx = SnippetContext::new("x\ny", Dialect::Sql);
        let numbered: Vec<_> = ctx.numbered_lines().collect();
        assert_eq!(numbered, vec![(1, "x"), (2, "y")]);
    }

    #[test]
    fn contains_ignore_case_matches_any_case() {
        let ctx = SnippetContext::new("Select * From Orders", Dialect::Sql);
        assert!(ctx.contains_ignore_case("FROM ORDERS"));
        assert!(!ctx.contains_ignore_case("WHERE"));
    }

    #[test]
    fn diagnostic_for_file_scoped_issue_has_empty_span() {
        let ctx = SnippetContext::new("Sub Main()", Dialect::VbNet);
        let issue = Issue::new("VBNet.MissingEndSub", Severity::Error, "missing");
        let diag = ctx.diagnostic(&issue);
        assert_eq!(diag.to_string(), "error: missing");
    }
}

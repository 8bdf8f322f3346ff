//! Core types for review findings and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity level for a finding.
///
/// Serialized as `Info`, `Warning`, `Error`; the lowercase spellings are
/// accepted when reading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Style or awareness finding.
    #[serde(alias = "info")]
    Info,
    /// Maintainability risk.
    #[serde(alias = "warning")]
    Warning,
    /// Pattern implies a correctness or safety risk.
    #[serde(alias = "error")]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Input dialect of a snippet. Selects which rule set runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Dialect {
    /// No marker matched.
    #[default]
    Unknown,
    /// Curly-brace language (C#).
    CSharp,
    /// Keyword-block language (VB.NET).
    VbNet,
    /// Statement language (T-SQL).
    Sql,
}

impl Dialect {
    /// All dialects, `Unknown` first.
    pub const ALL: [Self; 4] = [Self::Unknown, Self::CSharp, Self::VbNet, Self::Sql];

    /// Display name, also used as the issue-kind prefix of dialect rules.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::CSharp => "CSharp",
            Self::VbNet => "VBNet",
            Self::Sql => "SQL",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect `{0}` (expected csharp, vbnet, sql, or unknown)")]
pub struct ParseDialectError(pub String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Self::CSharp),
            "vbnet" | "vb" | "vb.net" => Ok(Self::VbNet),
            "sql" | "tsql" | "t-sql" => Ok(Self::Sql),
            "unknown" | "" => Ok(Self::Unknown),
            other => Err(ParseDialectError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = ParseDialectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for &'static str {
    fn from(dialect: Dialect) -> Self {
        dialect.name()
    }
}

/// A single finding.
///
/// Field names are the wire contract: `type`, `lineNumber` (nullable),
/// `message`, `suggestion`, `severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Dotted rule identifier (e.g. `CSharp.LongLine`, `Smell.DeepNesting`).
    #[serde(rename = "type")]
    pub kind: String,
    /// 1-based line, absent for snippet-scoped findings.
    pub line_number: Option<usize>,
    /// Human-readable description.
    pub message: String,
    /// Remediation text.
    pub suggestion: String,
    /// Severity of this finding.
    pub severity: Severity,
}

impl Issue {
    /// Creates a snippet-scoped issue with no suggestion.
    #[must_use]
    pub fn new(kind: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            line_number: None,
            message: message.into(),
            suggestion: String::new(),
            severity,
        }
    }

    /// Pins this issue to a 1-based line.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Adds a suggestion to this issue.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Formats the issue the way the console report prints it:
    /// `[Kind] (Line n): message -> suggestion`.
    #[must_use]
    pub fn format(&self) -> String {
        let line = self
            .line_number
            .map(|n| format!(" (Line {n})"))
            .unwrap_or_default();
        format!(
            "[{}]{}: {} -> {}",
            self.kind, line, self.message, self.suggestion
        )
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "{line}: ")?,
            None => write!(f, "-: ")?,
        }
        write!(f, "{} [{}] {}", self.severity, self.kind, self.message)
    }
}

/// Converts an Issue to a miette Diagnostic for rich display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{severity}: {message}")]
pub struct IssueDiagnostic {
    severity: Severity,
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl IssueDiagnostic {
    /// Creates a diagnostic covering `length` bytes from `offset`.
    #[must_use]
    pub fn new(issue: &Issue, offset: usize, length: usize) -> Self {
        Self {
            severity: issue.severity,
            message: issue.message.clone(),
            help: (!issue.suggestion.is_empty()).then(|| issue.suggestion.clone()),
            span: SourceSpan::from((offset, length)),
            label_message: issue.kind.clone(),
        }
    }
}

/// Result of reviewing one snippet.
///
/// Serializes as `{ summary, issues }`. Issues keep the order their rules
/// emitted them in: dialect rules first, then naming, then smells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One sentence, at most 120 characters, capitalized, ending in a period.
    pub summary: String,
    /// All findings, in insertion order.
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Checks if any issue meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= severity)
    }

    /// Returns issues of the given kind.
    #[must_use]
    pub fn of_kind(&self, kind: &str) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind == kind).collect()
    }

    /// Counts issues by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.issues
            .iter()
            .fold((0, 0, 0), |(e, w, i), issue| match issue.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }
}

//! Shared output formatting for review results.

use anyhow::Result;
use miette::{NamedSource, Report};
use serde::Serialize;
use snippet_review::{AnalysisResult, Dialect, Issue, Severity, SnippetContext};

use crate::OutputFormat;

/// Print review results in the specified format.
pub fn print(
    text: &str,
    dialect: Dialect,
    result: &AnalysisResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(dialect, result)),
        OutputFormat::Json => println!("{}", render_json(dialect, result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print_pretty(text, dialect, result),
    }
    Ok(())
}

/// JSON wire shape: the analysis result plus the dialect it was reviewed as.
#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a str,
    language: Dialect,
    issues: &'a [Issue],
}

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[36m",
    }
}

fn render_text(dialect: Dialect, result: &AnalysisResult) -> String {
    let mut out = format!(
        "=== Summary ===\n{}\n\n=== Language ===\n{dialect}\n\n=== Issues Found ===\n",
        result.summary
    );

    if result.issues.is_empty() {
        out.push_str("No issues detected.\n");
        return out;
    }

    for (i, issue) in result.issues.iter().enumerate() {
        out.push_str(&format!(
            "{}{}. {}\x1b[0m\n",
            color(issue.severity),
            i + 1,
            issue.format()
        ));
    }

    let (errors, warnings, infos) = result.count_by_severity();
    out.push_str(&format!(
        "\nFound {errors} error(s), {warnings} warning(s), {infos} info(s)\n"
    ));
    out
}

fn render_json(dialect: Dialect, result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        summary: &result.summary,
        language: dialect,
        issues: &result.issues,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_compact(result: &AnalysisResult) -> String {
    result
        .issues
        .iter()
        .map(|issue| format!("{issue}\n"))
        .collect()
}

fn print_pretty(text: &str, dialect: Dialect, result: &AnalysisResult) {
    println!("{}\n", result.summary);

    let ctx = SnippetContext::new(text, dialect);
    let name = format!("snippet ({dialect})");
    for issue in &result.issues {
        let report = Report::new(ctx.diagnostic(issue))
            .with_source_code(NamedSource::new(name.clone(), text.to_string()));
        println!("{report:?}");
    }

    if result.issues.is_empty() {
        println!("No issues detected.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            summary: "Deletes records from Orders.".to_string(),
            issues: vec![
                Issue::new(
                    "SQL.MissingWhere",
                    Severity::Error,
                    "DELETE/UPDATE without WHERE clause.",
                )
                .at_line(1)
                .with_suggestion("Add a WHERE clause to avoid affecting unintended rows."),
                Issue::new(
                    "VBNet.MissingEndSub",
                    Severity::Error,
                    "Detected 'Sub' without matching 'End Sub'.",
                )
                .with_suggestion("Ensure each Sub is closed with 'End Sub'."),
            ],
        }
    }

    #[test]
    fn text_report_has_console_sections() {
        let out = render_text(Dialect::Sql, &sample());
        assert!(out.starts_with("=== Summary ===\nDeletes records from Orders.\n\n"));
        assert!(out.contains("=== Language ===\nSQL\n"));
        assert!(out.contains(
            "1. [SQL.MissingWhere] (Line 1): DELETE/UPDATE without WHERE clause. -> Add a WHERE clause to avoid affecting unintended rows."
        ));
        assert!(out.contains("2. [VBNet.MissingEndSub]: Detected"));
        assert!(out.contains("Found 2 error(s), 0 warning(s), 0 info(s)"));
    }

    #[test]
    fn text_report_without_issues() {
        let result = AnalysisResult {
            summary: "Analyzes generic code snippet.".to_string(),
            issues: Vec::new(),
        };
        let out = render_text(Dialect::Unknown, &result);
        assert!(out.ends_with("=== Issues Found ===\nNo issues detected.\n"));
    }

    #[test]
    fn json_report_carries_language() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(Dialect::Sql, &sample()).unwrap()).unwrap();
        assert_eq!(json["language"], "SQL");
        assert_eq!(json["summary"], "Deletes records from Orders.");
        assert_eq!(json["issues"][0]["type"], "SQL.MissingWhere");
        assert_eq!(json["issues"][0]["lineNumber"], 1);
        assert!(json["issues"][1]["lineNumber"].is_null());
    }

    #[test]
    fn compact_report_is_one_line_per_issue() {
        let out = render_compact(&sample());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "1: error [SQL.MissingWhere] DELETE/UPDATE without WHERE clause.",
                "-: error [VBNet.MissingEndSub] Detected 'Sub' without matching 'End Sub'.",
            ]
        );
    }
}

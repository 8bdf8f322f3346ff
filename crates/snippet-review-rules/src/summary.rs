//! One-sentence intent summary.
//!
//! SQL snippets are summarized by their leading statement keyword, checked
//! in the order SELECT, INSERT, UPDATE, DELETE, CREATE PROCEDURE/FUNCTION.
//! Everything else (C#, VB.NET, unrecognized text) is summarized by the verb
//! in the first declared method name, falling back to the first class name.

use crate::vocabulary::mentions_loan_terms;
use regex::Regex;
use snippet_review_core::scan::{
    compile, csharp_class_header, csharp_method_header, vb_class_header, vb_procedure_header,
};
use snippet_review_core::{Dialect, SnippetContext, Summarizer, DEFAULT_SUMMARY};
use std::sync::LazyLock;

static SQL_CREATE_ROUTINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bCREATE\s+(?:PROC|PROCEDURE|FUNCTION)\b"));

static FROM_TABLE: LazyLock<Regex> = LazyLock::new(|| table_after("FROM"));
static INTO_TABLE: LazyLock<Regex> = LazyLock::new(|| table_after("INTO"));
static UPDATE_TABLE: LazyLock<Regex> = LazyLock::new(|| table_after("UPDATE"));

fn table_after(keyword: &str) -> Regex {
    compile(&format!(r"(?i)\b{keyword}\s+([\[\]A-Za-z0-9_.]+)"))
}

/// Verb fragments and the sentence each maps to, checked in order against
/// the lowercased name.
const VERBS: &[(&[&str], &str)] = &[
    (&["save", "insert"], "Saves data to the database."),
    (&["delete", "remove"], "Deletes records."),
    (&["get"], "Retrieves application data."),
    (&["update"], "Updates application data."),
    (&["calculate"], "Performs a calculation."),
    (&["process"], "Processes application logic."),
    (&["validate"], "Validates input or state."),
];

const GENERIC_LOGIC: &str = "Processes application logic.";

/// Heuristic summarizer over dialect keywords and declared names.
#[derive(Debug, Clone, Default)]
pub struct SummaryGenerator;

impl SummaryGenerator {
    /// Creates a new summary generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for SummaryGenerator {
    fn summarize(&self, ctx: &SnippetContext<'_>) -> String {
        if ctx.is_blank() {
            return DEFAULT_SUMMARY.to_string();
        }
        match ctx.dialect() {
            Dialect::Sql => summarize_sql(ctx.text()),
            _ => summarize_code(ctx),
        }
    }
}

fn summarize_sql(text: &str) -> String {
    let upper = text.to_uppercase();
    if upper.contains("SELECT") {
        format!("Retrieves data from {}.", table_name(&FROM_TABLE, text))
    } else if upper.contains("INSERT") {
        format!("Inserts new records into {}.", table_name(&INTO_TABLE, text))
    } else if upper.contains("UPDATE") {
        format!("Updates records in {}.", table_name(&UPDATE_TABLE, text))
    } else if upper.contains("DELETE") {
        format!("Deletes records from {}.", table_name(&FROM_TABLE, text))
    } else if SQL_CREATE_ROUTINE.is_match(text) {
        "Defines stored procedure/function.".to_string()
    } else {
        "Executes SQL command.".to_string()
    }
}

/// First table name after the clause keyword, brackets removed.
fn table_name(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .map(|c| c[1].replace(&['[', ']'][..], ""))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "table".to_string())
}

fn summarize_code(ctx: &SnippetContext<'_>) -> String {
    if mentions_loan_terms(ctx) {
        return "Calculates loan interest.".to_string();
    }

    let Some(name) = first_declared_name(ctx) else {
        return GENERIC_LOGIC.to_string();
    };
    let lowered = name.to_lowercase();
    VERBS
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| lowered.contains(f)))
        .map_or(GENERIC_LOGIC, |(_, sentence)| *sentence)
        .to_string()
}

fn first_declared_name(ctx: &SnippetContext<'_>) -> Option<String> {
    let lines = ctx.lines();
    if ctx.dialect() == Dialect::VbNet {
        lines
            .iter()
            .find_map(|l| vb_procedure_header(l).map(|(_, h)| h.name))
            .or_else(|| lines.iter().find_map(|l| vb_class_header(l)))
    } else {
        lines
            .iter()
            .find_map(|l| csharp_method_header(l).map(|h| h.name))
            .or_else(|| lines.iter().find_map(|l| csharp_class_header(l)))
    }
}

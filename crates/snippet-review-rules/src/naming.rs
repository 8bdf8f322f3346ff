//! Rule to flag non-descriptive identifiers.
//!
//! # Rationale
//!
//! Names like `tmp`, `x` or `f` force the reader to reconstruct intent from
//! the body. A verb/noun name carries it for free.
//!
//! # Detected Patterns
//!
//! Identifiers are pulled per dialect:
//!
//! - C#: method headers (`type Name(`) and variable declarations
//!   (`var|Type name` followed by `=`, `;` or `,`)
//! - VB.NET: `Sub`/`Function` headers and `Dim` declarations
//! - SQL: `FROM`/`JOIN` table aliases, `AS` aliases and
//!   `CREATE PROC|PROCEDURE|FUNCTION` names
//!
//! Each identifier is then checked in order:
//!
//! 1. starts with a digit (no further checks for that identifier)
//! 2. function name shorter than 3 characters
//! 3. variable or alias shorter than 2 characters, except `i`/`j` bound by a
//!    loop header
//! 4. one of the generic names in [`GENERIC_NAMES`](crate::GENERIC_NAMES)
//!
//! Checks 2-4 are independent, so one identifier can yield several issues.

use crate::vocabulary::{is_generic, mentions_loan_terms};
use regex::Regex;
use snippet_review_core::scan::{
    compile, csharp_method_headers, is_csharp_non_declaration, sql_procedure_header,
    strip_comment, vb_procedure_header,
};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Rule name for the naming check.
pub const NAME: &str = "Naming.NonDescriptive";

const BASE_SUGGESTION: &str =
    "Use a meaningful verb/noun, e.g., 'CalculateLoanInterest' or 'ProcessData'.";

static CSHARP_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(var|[A-Za-z_][A-Za-z0-9_<>\[\]?]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:=|;|,)")
});

static CSHARP_FOR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bfor\s*\(([^)]*)\)"));

static CSHARP_LOOP_COUNTER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:var|[A-Za-z_][A-Za-z0-9_<>\[\]?]*)\s+([ij])\b"));

static VB_DIM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bDim\s+([A-Za-z_][A-Za-z0-9_]*)"));

static VB_FOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\bFor\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s+As\s+\w+)?\s*=")
});

static SQL_TABLE_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:FROM|JOIN)\s+\S+\s+(?:AS\s+)?([A-Za-z_][A-Za-z0-9_]*)")
});

static SQL_AS_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bAS\s+([A-Za-z_][A-Za-z0-9_]*)"));

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| compile(r#""[^"]*""#));

/// Words that follow `FROM t`, `JOIN t` or `AS` without being aliases.
const SQL_NON_ALIASES: &[&str] = &[
    "where", "join", "inner", "left", "right", "outer", "cross", "full", "on", "group", "order",
    "having", "union", "with", "set", "values", "select", "into", "as", "and", "or", "not",
    "by", "go", "begin", "end", "when", "then", "else", "option", "for", "except", "intersect",
    "return", "returns", "declare", "int", "bigint", "smallint", "tinyint", "bit", "decimal",
    "numeric", "money", "float", "real", "date", "datetime", "datetime2", "time", "char",
    "varchar", "nchar", "nvarchar", "text", "uniqueidentifier", "table",
];

/// Whether an identifier names a callable or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Function,
    Variable,
}

/// Flags identifiers that are too short, start with a digit, or are generic.
#[derive(Debug, Clone, Default)]
pub struct NonDescriptiveNames;

impl NonDescriptiveNames {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NonDescriptiveNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Naming
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        matches!(dialect, Dialect::CSharp | Dialect::VbNet | Dialect::Sql)
    }

    fn description(&self) -> &'static str {
        "Flags short, digit-leading, or generic identifiers"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let suggestion = suggestion_for(ctx);
        let (names, loop_counters) = match ctx.dialect() {
            Dialect::CSharp => (csharp_identifiers(ctx), csharp_loop_counters(ctx)),
            Dialect::VbNet => (vb_identifiers(ctx), vb_loop_counters(ctx)),
            Dialect::Sql => (sql_identifiers(ctx), HashSet::new()),
            Dialect::Unknown => return Vec::new(),
        };

        let mut issues = Vec::new();
        for (line, name, role) in names {
            let exempt = loop_counters.contains(&name.to_ascii_lowercase());
            for message in evaluate(&name, role, exempt) {
                issues.push(
                    Issue::new(NAME, Severity::Info, message)
                        .at_line(line)
                        .with_suggestion(suggestion.clone()),
                );
            }
        }
        issues
    }
}

/// Runs the ordered name checks and returns one message per failure.
fn evaluate(name: &str, role: Role, exempt_loop_counter: bool) -> Vec<String> {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return vec![format!("Name '{name}' starts with a number.")];
    }

    let len = name.chars().count();
    let mut messages = Vec::new();
    if role == Role::Function && len < 3 {
        messages.push(format!("Function/method name '{name}' is too short."));
    }
    if role == Role::Variable && len < 2 && !exempt_loop_counter {
        messages.push(format!("Variable name '{name}' is too short."));
    }
    if is_generic(name) {
        messages.push(format!("Name '{name}' is generic and non-descriptive."));
    }
    messages
}

fn suggestion_for(ctx: &SnippetContext<'_>) -> String {
    match ctx.dialect() {
        Dialect::Sql => {
            let verb = if ctx.contains_ignore_case("INSERT") {
                Some("InsertRecord")
            } else if ctx.contains_ignore_case("UPDATE") {
                Some("UpdateRecord")
            } else {
                None
            };
            verb.map_or_else(
                || BASE_SUGGESTION.to_string(),
                |v| format!("{BASE_SUGGESTION} For SQL, consider '{v}'."),
            )
        }
        Dialect::CSharp | Dialect::VbNet if mentions_loan_terms(ctx) => format!(
            "{BASE_SUGGESTION} Given parameters like principal/rate/term, consider 'CalculateLoanInterest'."
        ),
        _ => BASE_SUGGESTION.to_string(),
    }
}

/// Blanks string contents and drops everything after a line comment marker.
fn code_only(line: &str, comment: &str) -> String {
    let stripped = STRING_LITERAL.replace_all(line, "\"\"");
    strip_comment(&stripped, comment).to_string()
}

type Found = Vec<(usize, String, Role)>;

fn csharp_identifiers(ctx: &SnippetContext<'_>) -> Found {
    let mut found = Vec::new();
    for (n, raw) in ctx.numbered_lines() {
        let line = code_only(raw, "//");
        for header in csharp_method_headers(&line) {
            found.push((n, header.name, Role::Function));
        }
        for caps in CSHARP_VARIABLE.captures_iter(&line) {
            let (ty, name) = (&caps[1], &caps[2]);
            if is_csharp_non_declaration(ty) || is_csharp_non_declaration(name) {
                continue;
            }
            found.push((n, name.to_string(), Role::Variable));
        }
    }
    found
}

fn csharp_loop_counters(ctx: &SnippetContext<'_>) -> HashSet<String> {
    ctx.lines()
        .iter()
        .filter_map(|line| CSHARP_FOR.captures(line))
        .filter_map(|header| {
            CSHARP_LOOP_COUNTER
                .captures(&header[1])
                .map(|c| c[1].to_ascii_lowercase())
        })
        .collect()
}

fn vb_identifiers(ctx: &SnippetContext<'_>) -> Found {
    let mut found = Vec::new();
    for (n, raw) in ctx.numbered_lines() {
        let line = code_only(raw, "'");
        if let Some((_, header)) = vb_procedure_header(&line) {
            found.push((n, header.name, Role::Function));
        }
        for caps in VB_DIM.captures_iter(&line) {
            found.push((n, caps[1].to_string(), Role::Variable));
        }
    }
    found
}

fn vb_loop_counters(ctx: &SnippetContext<'_>) -> HashSet<String> {
    ctx.lines()
        .iter()
        .filter_map(|line| VB_FOR.captures(line))
        .map(|c| c[1].to_ascii_lowercase())
        .filter(|v| v == "i" || v == "j")
        .collect()
}

fn is_sql_non_alias(word: &str) -> bool {
    SQL_NON_ALIASES.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn sql_identifiers(ctx: &SnippetContext<'_>) -> Found {
    let mut found = Vec::new();
    for (n, line) in ctx.numbered_lines() {
        let code = line.split("--").next().unwrap_or_default();
        let mut seen: Vec<String> = Vec::new();
        let aliases = SQL_TABLE_ALIAS
            .captures_iter(code)
            .chain(SQL_AS_ALIAS.captures_iter(code))
            .map(|c| c[1].to_string());
        for alias in aliases {
            if is_sql_non_alias(&alias) || seen.iter().any(|s| s.eq_ignore_ascii_case(&alias)) {
                continue;
            }
            seen.push(alias.clone());
            found.push((n, alias, Role::Variable));
        }
        if let Some(header) = sql_procedure_header(code) {
            found.push((n, header.name, Role::Function));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: &str, dialect: Dialect) -> Vec<Issue> {
        let ctx = SnippetContext::new(code, dialect);
        NonDescriptiveNames::new().check(&ctx)
    }

    fn messages(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.message.as_str()).collect()
    }

    #[test]
    fn test_generic_variable_in_every_dialect() {
        let cs = check("var tmp = 1;", Dialect::CSharp);
        assert_eq!(messages(&cs), ["Name 'tmp' is generic and non-descriptive."]);

        let vb = check("Dim TMP As Integer", Dialect::VbNet);
        assert_eq!(messages(&vb), ["Name 'TMP' is generic and non-descriptive."]);

        let sql = check("SELECT o.Id FROM Orders AS tmp", Dialect::Sql);
        assert_eq!(messages(&sql), ["Name 'tmp' is generic and non-descriptive."]);
    }

    #[test]
    fn test_short_method_name() {
        let issues = check("public int Do(int count) { return count; }", Dialect::CSharp);
        assert_eq!(messages(&issues), ["Function/method name 'Do' is too short."]);
        assert_eq!(issues[0].line_number, Some(1));
    }

    #[test]
    fn test_short_and_generic_yield_two_issues() {
        let issues = check("string value = \"\";\nint x = 2;", Dialect::CSharp);
        assert_eq!(
            messages(&issues),
            [
                "Name 'value' is generic and non-descriptive.",
                "Variable name 'x' is too short.",
            ]
        );
        assert_eq!(issues[1].line_number, Some(2));
    }

    #[test]
    fn test_digit_prefix_short_circuits() {
        assert_eq!(
            evaluate("1a", Role::Function, false),
            ["Name '1a' starts with a number."]
        );
    }

    #[test]
    fn test_loop_counters_are_exempt() {
        let issues = check("for (int i = 0; i < n; i++) { }", Dialect::CSharp);
        assert!(issues.is_empty());

        let issues = check("For i = 1 To 10\n  Dim j = i\nNext", Dialect::VbNet);
        assert_eq!(messages(&issues), ["Variable name 'j' is too short."]);
    }

    #[test]
    fn test_control_flow_is_not_a_declaration() {
        let issues = check("return x;\nusing System;", Dialect::CSharp);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_strings_and_comments_are_ignored() {
        let issues = check("Log(\"hello a, world\"); // var tmp = 1;", Dialect::CSharp);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_sql_short_alias_and_where_keyword() {
        let issues = check("SELECT o.Id FROM Orders o WHERE o.Id = 1", Dialect::Sql);
        assert_eq!(messages(&issues), ["Variable name 'o' is too short."]);

        let issues = check("SELECT Id FROM Orders WHERE Id = 1", Dialect::Sql);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_sql_procedure_name() {
        let issues = check("CREATE PROCEDURE dbo.Go2 AS", Dialect::Sql);
        assert_eq!(messages(&issues), Vec::<&str>::new());
        let issues = check("CREATE PROC p1 AS", Dialect::Sql);
        assert_eq!(messages(&issues), ["Function/method name 'p1' is too short."]);
    }

    #[test]
    fn test_suggestions_follow_context() {
        let issues = check("INSERT INTO Orders SELECT * FROM Staging s", Dialect::Sql);
        assert!(issues[0]
            .suggestion
            .ends_with("For SQL, consider 'InsertRecord'."));

        let issues = check("decimal rate = 1;\nint x = 2;", Dialect::CSharp);
        assert!(issues[0]
            .suggestion
            .ends_with("consider 'CalculateLoanInterest'."));

        let issues = check(
            "decimal Interest(decimal loanPrincipal, decimal annualRate)\n{\n    int x = 2;\n}",
            Dialect::CSharp,
        );
        assert_eq!(issues.len(), 1);
        assert!(issues[0]
            .suggestion
            .ends_with("consider 'CalculateLoanInterest'."));

        let issues = check("int x = 2;", Dialect::CSharp);
        assert_eq!(issues[0].suggestion, BASE_SUGGESTION);
    }

    #[test]
    fn test_unknown_dialect_is_skipped() {
        let rule = NonDescriptiveNames::new();
        assert!(!rule.applies_to(Dialect::Unknown));
        assert!(check("var tmp = 1;", Dialect::Unknown).is_empty());
    }
}

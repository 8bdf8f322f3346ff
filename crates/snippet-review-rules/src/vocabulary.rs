//! Fixed word lists shared by the naming checks and the summary generator.

use regex::Regex;
use snippet_review_core::scan::compile;
use snippet_review_core::SnippetContext;
use std::sync::LazyLock;

/// Identifiers that say nothing about what they hold (compared ignoring case).
pub const GENERIC_NAMES: &[&str] = &["abc", "tmp", "temp", "test", "func", "data", "value", "var"];

/// Loan parameter names, matched against identifier parts.
const LOAN_TERMS: &[&str] = &["principal", "rate", "term"];

static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Za-z]+"));

/// Whether `name` is in [`GENERIC_NAMES`].
#[must_use]
pub fn is_generic(name: &str) -> bool {
    GENERIC_NAMES.iter().any(|g| g.eq_ignore_ascii_case(name))
}

/// Splits a letters-only word at lower-to-upper transitions:
/// `annualRate` gives `annual`, `Rate`.
fn word_parts(word: &str) -> Vec<&str> {
    let bytes = word.as_bytes();
    let mut bounds: Vec<usize> = std::iter::once(0)
        .chain((1..bytes.len()).filter(|&i| {
            bytes[i].is_ascii_uppercase() && bytes[i - 1].is_ascii_lowercase()
        }))
        .collect();
    bounds.push(bytes.len());
    bounds.windows(2).map(|w| &word[w[0]..w[1]]).collect()
}

/// Whether any identifier part in the snippet is a loan parameter name
/// (`principal`, `loanPrincipal`, `annual_rate`, `termMonths`).
#[must_use]
pub fn mentions_loan_terms(ctx: &SnippetContext<'_>) -> bool {
    WORD.find_iter(ctx.text())
        .flat_map(|m| word_parts(m.as_str()))
        .any(|part| LOAN_TERMS.iter().any(|t| t.eq_ignore_ascii_case(part)))
}

//! Summary sentence finalization.

/// Summary used for blank snippets and empty summarizer output.
pub const DEFAULT_SUMMARY: &str = "Analyzes generic code snippet.";

/// Maximum summary length in characters.
pub const MAX_SUMMARY_LEN: usize = 120;

/// Normalizes a raw summary into one sentence.
///
/// Trims, capitalizes the first letter, ensures a trailing period, and
/// truncates to [`MAX_SUMMARY_LEN`] characters while keeping exactly one
/// trailing period.
#[must_use]
pub fn finalize_summary(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_SUMMARY.to_string();
    }

    let mut chars = trimmed.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if !sentence.ends_with('.') {
        sentence.push('.');
    }

    if sentence.chars().count() > MAX_SUMMARY_LEN {
        let head: String = sentence.chars().take(MAX_SUMMARY_LEN - 1).collect();
        sentence = head.trim_end_matches(&['.', ' '][..]).to_string();
        sentence.push('.');
    }

    sentence
}

//! Rule to flag callables with long parameter lists.
//!
//! # Detected Patterns
//!
//! The first callable header on each line, when its parameter list opens and
//! closes on that line. Parameters are counted by commas; `()` is zero.
//! SQL procedures may list `@parameters` without parentheses up to `AS`.
//!
//! # Configuration
//!
//! - `max_params`: Most parameters allowed (default: 5)

use snippet_review_core::scan::{csharp_method_header, sql_procedure_header, vb_procedure_header};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the long-parameter-list smell.
pub const NAME: &str = "Smell.LongParameterList";

/// Default most parameters allowed.
pub const DEFAULT_MAX_PARAMS: usize = 5;

/// Flags callables declaring too many parameters.
#[derive(Debug, Clone)]
pub struct LongParameterList {
    max_params: usize,
}

impl Default for LongParameterList {
    fn default() -> Self {
        Self::new()
    }
}

impl LongParameterList {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
        }
    }

    /// Sets the most parameters allowed.
    #[must_use]
    pub fn max_params(mut self, max: usize) -> Self {
        self.max_params = max;
        self
    }
}

impl Rule for LongParameterList {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> RuleFamily {
        RuleFamily::Smell
    }

    fn applies_to(&self, dialect: Dialect) -> bool {
        dialect != Dialect::Unknown
    }

    fn description(&self) -> &'static str {
        "Flags methods and procedures with more than five parameters"
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let dialect = ctx.dialect();
        let (noun, suggestion) = match dialect {
            Dialect::CSharp => (
                "Method",
                "Consider grouping parameters into an object or reducing parameters.",
            ),
            Dialect::VbNet => (
                "Method",
                "Consider grouping parameters into a type or reducing parameters.",
            ),
            Dialect::Sql => (
                "Procedure",
                "Refactor to reduce parameters or use table-valued parameters.",
            ),
            Dialect::Unknown => return Vec::new(),
        };

        ctx.numbered_lines()
            .filter_map(|(n, line)| {
                let header = match dialect {
                    Dialect::CSharp => csharp_method_header(line),
                    Dialect::VbNet => vb_procedure_header(line).map(|(_, h)| h),
                    _ => sql_procedure_header(line),
                }?;
                let count = header.param_count()?;
                (count > self.max_params).then(|| {
                    Issue::new(
                        NAME,
                        Severity::Warning,
                        format!("{noun} '{}' has {count} parameters.", header.name),
                    )
                    .at_line(n)
                    .with_suggestion(suggestion)
                })
            })
            .collect()
    }
}

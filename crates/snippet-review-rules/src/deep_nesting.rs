//! Rule to flag deeply nested bodies.
//!
//! # Rationale
//!
//! Every nesting level is another condition the reader has to hold in mind.
//! Past three levels, early returns or helper methods read better.
//!
//! # Detected Patterns
//!
//! The maximum structural depth reached inside each body, counting the
//! body's own opener as the first level:
//!
//! - C#: brace depth inside each method
//! - VB.NET: keyword-block depth inside each `Sub`/`Function`
//! - SQL: `BEGIN`/`END` depth inside each procedure, or over the whole
//!   snippet when it defines none
//!
//! # Configuration
//!
//! - `max_depth`: Deepest allowed level (default: 3)

use snippet_review_core::scan::{csharp_methods, sql_batch, sql_procedures, vb_procedures, Block};
use snippet_review_core::{Dialect, Issue, Rule, RuleFamily, Severity, SnippetContext};

/// Rule name for the deep-nesting smell.
pub const NAME: &str = "Smell.DeepNesting";

/// Default deepest allowed level.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Flags bodies whose nesting exceeds a depth limit.
#[derive(Debug, Clone)]
pub struct DeepNesting {
    max_depth: usize,
}

impl Default for DeepNesting {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepNesting {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the deepest allowed level.
    #[must_use]
    pub fn max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    fn too_deep(&self, blocks: Vec<Block>) -> impl Iterator<Item = Block> + '_ {
        blocks.into_iter().filter(|b| b.max_depth > self.max_depth)
    }
}

impl Rule for DeepNesting {
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
        "Flags bodies nested more than three levels deep"
    }

    fn check(&self, ctx: &SnippetContext<'_>) -> Vec<Issue> {
        let lines = ctx.lines();
        let limit = self.max_depth;
        match ctx.dialect() {
            Dialect::CSharp | Dialect::VbNet => {
                let blocks = if ctx.dialect() == Dialect::CSharp {
                    csharp_methods(lines)
                } else {
                    vb_procedures(lines)
                };
                self.too_deep(blocks)
                    .map(|b| {
                        Issue::new(
                            NAME,
                            Severity::Warning,
                            format!(
                                "Nested blocks exceed {limit} levels in function '{}'.",
                                b.name
                            ),
                        )
                        .at_line(b.start)
                        .with_suggestion("Refactor using early returns or helper methods.")
                    })
                    .collect()
            }
            Dialect::Sql => {
                let procedures = sql_procedures(lines);
                let blocks = if procedures.is_empty() {
                    vec![sql_batch(lines)]
                } else {
                    procedures
                };
                self.too_deep(blocks)
                    .map(|b| {
                        let message = if b.name.is_empty() {
                            format!("Nested BEGIN/END blocks exceed {limit} levels.")
                        } else {
                            format!(
                                "Nested BEGIN/END blocks exceed {limit} levels in procedure '{}'.",
                                b.name
                            )
                        };
                        Issue::new(NAME, Severity::Warning, message)
                            .at_line(b.start)
                            .with_suggestion("Refactor into smaller procedures or reduce nesting.")
                    })
                    .collect()
            }
            Dialect::Unknown => Vec::new(),
        }
    }
}

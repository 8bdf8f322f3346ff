//! # snippet-review-rules
//!
//! Built-in review rules for snippet-review.
//!
//! This crate provides every concrete check together with the heuristic
//! [`SummaryGenerator`] and the rule registry.
//!
//! ## Available Rules
//!
//! | Name | Family | Dialects | Description |
//! |------|--------|----------|-------------|
//! | `CSharp.LongLine` | dialect | C# | Lines longer than 120 characters |
//! | `CSharp.TODO` | dialect | C# | TODO markers |
//! | `CSharp.NestedIfs` | dialect | C# | Methods with more than two `if` tokens |
//! | `VBNet.GoTo` | dialect | VB.NET | `GoTo` jumps |
//! | `VBNet.MissingEnd` | dialect | VB.NET | `Sub`/`Function` without a terminator |
//! | `SQL.SelectStar` | dialect | SQL | `SELECT *` projections |
//! | `SQL.MissingWhere` | dialect | SQL | `DELETE`/`UPDATE` without `WHERE` |
//! | `SQL.NoLock` | dialect | SQL | `NOLOCK` hints |
//! | `Naming.NonDescriptive` | naming | all three | Short, digit-leading, or generic names |
//! | `Smell.DeepNesting` | smell | all three | Bodies nested past three levels |
//! | `Smell.LongParameterList` | smell | all three | More than five parameters |
//! | `Smell.LargeStructure` | smell | all three | Oversized classes and procedures |
//! | `Smell.RepeatedLiteral` | smell | any | Literals repeated on three or more lines |
//!
//! ## Usage
//!
//! ```ignore
//! use snippet_review_core::{detect, Analyzer};
//! use snippet_review_rules::{all_rules, SummaryGenerator};
//!
//! let analyzer = Analyzer::builder()
//!     .rules(all_rules())
//!     .summarizer(SummaryGenerator::new())
//!     .build();
//!
//! let code = "DELETE FROM Orders";
//! let result = analyzer.analyze(code, detect(code));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod csharp_long_line;
pub mod csharp_nested_ifs;
mod csharp_todo;
pub mod deep_nesting;
pub mod large_structure;
pub mod long_parameter_list;
mod naming;
mod registry;
pub mod repeated_literal;
pub mod sql_missing_where;
mod sql_nolock;
mod sql_select_star;
mod summary;
pub mod vbnet_goto;
pub mod vbnet_missing_end;
mod vocabulary;

pub use csharp_long_line::CSharpLongLine;
pub use csharp_nested_ifs::CSharpNestedIfs;
pub use csharp_todo::CSharpTodo;
pub use deep_nesting::DeepNesting;
pub use large_structure::LargeStructure;
pub use long_parameter_list::LongParameterList;
pub use naming::NonDescriptiveNames;
pub use registry::{all_rules, configured_rules, rules_for, Preset, UnknownPreset};
pub use repeated_literal::RepeatedLiteral;
pub use sql_missing_where::SqlMissingWhere;
pub use sql_nolock::SqlNoLock;
pub use sql_select_star::SqlSelectStar;
pub use summary::SummaryGenerator;
pub use vbnet_goto::VbNetGoTo;
pub use vbnet_missing_end::VbNetMissingEnd;
pub use vocabulary::GENERIC_NAMES;

/// Re-export core types for convenience.
pub use snippet_review_core::{Issue, Rule, Severity};

//! Rule registry and presets.
//!
//! The registry order is the emission order inside each family, so
//! [`all_rules`] lists the C# checks before the VB.NET checks before the SQL
//! checks, and the smells in the order their issues appear in a report.

use crate::{
    csharp_long_line, csharp_nested_ifs, deep_nesting, large_structure, long_parameter_list,
    repeated_literal, CSharpLongLine, CSharpNestedIfs, CSharpTodo, DeepNesting, LargeStructure,
    LongParameterList, NonDescriptiveNames, RepeatedLiteral, SqlMissingWhere, SqlNoLock,
    SqlSelectStar, VbNetGoTo, VbNetMissingEnd,
};
use snippet_review_core::{Config, Dialect, RuleBox, RuleFamily};
use std::str::FromStr;

/// Preset configurations for snippet-review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every rule family: dialect rules, naming, and smells.
    #[default]
    Full,
    /// Only the fixed per-dialect rules.
    RulesOnly,
    /// Correctness rules plus long lines, for gradual adoption.
    Minimal,
}

impl Preset {
    /// All presets.
    pub const ALL: [Self; 3] = [Self::Full, Self::RulesOnly, Self::Minimal];

    /// Returns the preset name as written in configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::RulesOnly => "rules-only",
            Self::Minimal => "minimal",
        }
    }

    /// Returns the rules for this preset with default settings.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        self.configured(&Config::default())
    }

    /// Returns the rules for this preset with thresholds from `config`.
    #[must_use]
    pub fn configured(self, config: &Config) -> Vec<RuleBox> {
        let rules = registry(config);
        match self {
            Self::Full => rules,
            Self::RulesOnly => rules
                .into_iter()
                .filter(|r| r.family() == RuleFamily::Dialect)
                .collect(),
            Self::Minimal => rules
                .into_iter()
                .filter(|r| MINIMAL.contains(&r.name()))
                .collect(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{0}` (expected full, rules-only, or minimal)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "" => Ok(Self::Full),
            "rules-only" | "rules_only" | "rules" => Ok(Self::RulesOnly),
            "minimal" => Ok(Self::Minimal),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

const MINIMAL: &[&str] = &[
    csharp_long_line::NAME,
    crate::vbnet_missing_end::NAME,
    crate::sql_missing_where::NAME,
];

/// Every rule, in registry order, with thresholds read from `config`.
fn registry(config: &Config) -> Vec<RuleBox> {
    vec![
        Box::new(CSharpLongLine::new().max_length(config.rule_usize(
            csharp_long_line::NAME,
            "max_length",
            csharp_long_line::DEFAULT_MAX_LENGTH,
        ))),
        Box::new(CSharpTodo::new()),
        Box::new(CSharpNestedIfs::new().max_ifs(config.rule_usize(
            csharp_nested_ifs::NAME,
            "max_ifs",
            csharp_nested_ifs::DEFAULT_MAX_IFS,
        ))),
        Box::new(VbNetGoTo::new()),
        Box::new(VbNetMissingEnd::new()),
        Box::new(SqlSelectStar::new()),
        Box::new(SqlMissingWhere::new()),
        Box::new(SqlNoLock::new()),
        Box::new(NonDescriptiveNames::new()),
        Box::new(DeepNesting::new().max_depth(config.rule_usize(
            deep_nesting::NAME,
            "max_depth",
            deep_nesting::DEFAULT_MAX_DEPTH,
        ))),
        Box::new(LongParameterList::new().max_params(config.rule_usize(
            long_parameter_list::NAME,
            "max_params",
            long_parameter_list::DEFAULT_MAX_PARAMS,
        ))),
        Box::new(
            LargeStructure::new()
                .max_lines(config.rule_usize(
                    large_structure::NAME,
                    "max_lines",
                    large_structure::DEFAULT_MAX_LINES,
                ))
                .max_methods(config.rule_usize(
                    large_structure::NAME,
                    "max_methods",
                    large_structure::DEFAULT_MAX_METHODS,
                )),
        ),
        Box::new(RepeatedLiteral::new().min_lines(config.rule_usize(
            repeated_literal::NAME,
            "min_lines",
            repeated_literal::DEFAULT_MIN_LINES,
        ))),
    ]
}

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    registry(&Config::default())
}

/// Returns the rules that run for `dialect`, in registry order.
#[must_use]
pub fn rules_for(dialect: Dialect) -> Vec<RuleBox> {
    all_rules()
        .into_iter()
        .filter(|r| r.applies_to(dialect))
        .collect()
}

/// Returns the rules selected by the configured preset (default: full),
/// with thresholds from the per-rule options.
///
/// # Errors
///
/// Returns an error if `preset` names no known preset.
pub fn configured_rules(config: &Config) -> Result<Vec<RuleBox>, UnknownPreset> {
    let preset = config
        .preset
        .as_deref()
        .map_or(Ok(Preset::Full), Preset::from_str)?;
    tracing::debug!("Using preset {preset}");
    Ok(preset.configured(config))
}

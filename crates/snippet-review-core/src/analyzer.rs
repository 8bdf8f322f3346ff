//! Core analyzer for orchestrating a snippet review.

use crate::config::{Config, RuleConfig};
use crate::context::SnippetContext;
use crate::detect::detect;
use crate::rule::{Rule, RuleBox, RuleFamily, Summarizer, SummarizerBox};
use crate::summary::{finalize_summary, DEFAULT_SUMMARY};
use crate::types::{AnalysisResult, Dialect, Issue};

use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    summarizer: Option<SummarizerBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the summarizer.
    #[must_use]
    pub fn summarizer<S: Summarizer + 'static>(mut self, summarizer: S) -> Self {
        self.summarizer = Some(Box::new(summarizer));
        self
    }

    /// Sets a boxed summarizer.
    #[must_use]
    pub fn summarizer_box(mut self, summarizer: SummarizerBox) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            summarizer: self.summarizer,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// The main analyzer that orchestrates a review.
///
/// Rules run family by family (dialect, naming, smell) and in registration
/// order within a family. Issues are never re-sorted afterwards.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    summarizer: Option<SummarizerBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rule(rule_name)
    }

    /// Reviews a snippet already classified as `dialect`.
    ///
    /// Never fails: any input, including blank text, yields a result.
    #[must_use]
    pub fn analyze(&self, text: &str, dialect: Dialect) -> AnalysisResult {
        let ctx = SnippetContext::new(text, dialect);
        if ctx.is_blank() {
            debug!("Blank snippet, skipping rules");
            return AnalysisResult {
                summary: DEFAULT_SUMMARY.to_string(),
                issues: Vec::new(),
            };
        }

        info!(
            "Reviewing {} lines as {}",
            ctx.lines().len(),
            ctx.dialect()
        );

        let mut issues = Vec::new();
        for family in RuleFamily::ORDER {
            for rule in self.rules.iter().filter(|r| r.family() == family) {
                if !rule.applies_to(dialect) {
                    continue;
                }
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }

                let found = rule.check(&ctx);
                debug!("{} reported {} issue(s)", rule.name(), found.len());
                issues.extend(self.apply_severity_override(rule.name(), found));
            }
        }

        let raw = self
            .summarizer
            .as_ref()
            .map_or_else(String::new, |s| s.summarize(&ctx));
        let summary = finalize_summary(&raw);

        info!("Review complete: {} issues", issues.len());

        AnalysisResult { summary, issues }
    }

    /// Reviews a snippet, classifying it first.
    ///
    /// A dialect set in `[analyzer]` configuration takes precedence over
    /// detection.
    #[must_use]
    pub fn analyze_detected(&self, text: &str) -> AnalysisResult {
        let dialect = self
            .config
            .analyzer
            .dialect
            .unwrap_or_else(|| detect(text));
        self.analyze(text, dialect)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut issues: Vec<Issue>) -> Vec<Issue> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for issue in &mut issues {
                issue.severity = severity;
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    struct Fixed {
        name: &'static str,
        family: RuleFamily,
    }

    impl Rule for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn family(&self) -> RuleFamily {
            self.family
        }
        fn applies_to(&self, dialect: Dialect) -> bool {
            dialect != Dialect::Unknown
        }
        fn check(&self, _ctx: &SnippetContext<'_>) -> Vec<Issue> {
            vec![Issue::new(self.name, Severity::Warning, "found").at_line(1)]
        }
    }

    struct Echo;

    impl Summarizer for Echo {
        fn summarize(&self, ctx: &SnippetContext<'_>) -> String {
            format!("reviews {}", ctx.dialect())
        }
    }

    fn analyzer(config: Config) -> Analyzer {
        Analyzer::builder()
            .rule(Fixed {
                name: "Smell.A",
                family: RuleFamily::Smell,
            })
            .rule(Fixed {
                name: "Naming.B",
                family: RuleFamily::Naming,
            })
            .rule(Fixed {
                name: "SQL.C",
                family: RuleFamily::Dialect,
            })
            .summarizer(Echo)
            .config(config)
            .build()
    }

    #[test]
    fn test_builder() {
        let built = analyzer(Config::default());
        assert_eq!(built.rule_count(), 3);
        assert!(built.rule_config("SQL.C").is_none());
    }

    #[test]
    fn families_run_in_order() {
        let result = analyzer(Config::default()).analyze("SELECT 1", Dialect::Sql);
        let kinds: Vec<_> = result.issues.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, ["SQL.C", "Naming.B", "Smell.A"]);
        assert_eq!(result.summary, "Reviews SQL.");
    }

    #[test]
    fn blank_input_short_circuits() {
        let result = analyzer(Config::default()).analyze(" \n ", Dialect::Sql);
        assert!(result.issues.is_empty());
        assert_eq!(result.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn dialect_filter_applies() {
        let result = analyzer(Config::default()).analyze("hello", Dialect::Unknown);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn config_disables_and_overrides() {
        let config = Config::parse(
            "[rules.\"Naming.B\"]\nenabled = false\n[rules.\"SQL.C\"]\nseverity = \"error\"\n",
        )
        .unwrap();
        let result = analyzer(config).analyze("SELECT 1", Dialect::Sql);
        assert!(result.of_kind("Naming.B").is_empty());
        assert_eq!(result.of_kind("SQL.C")[0].severity, Severity::Error);
        assert!(result.has_errors());
    }

    #[test]
    fn configured_dialect_wins_over_detection() {
        let config = Config::parse("[analyzer]\ndialect = \"vbnet\"\n").unwrap();
        let result = analyzer(config).analyze_detected("SELECT * FROM t");
        assert_eq!(result.summary, "Reviews VBNet.");
    }

    #[test]
    fn missing_summarizer_uses_default() {
        let analyzer = Analyzer::builder().build();
        assert_eq!(analyzer.analyze("x", Dialect::Unknown).summary, DEFAULT_SUMMARY);
    }
}

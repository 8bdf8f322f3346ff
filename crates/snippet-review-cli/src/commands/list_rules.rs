//! List rules command implementation.

use snippet_review::rules::{all_rules, Preset};
use snippet_review::{Dialect, RuleBox};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<26} {:<8} {:<20} {:<8} Description",
        "Name", "Family", "Dialects", "Severity"
    );
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!(
            "{:<26} {:<8} {:<20} {:<8} {}",
            rule.name(),
            rule.family().to_string(),
            dialects(&rule),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let marker = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<11} - {} rules{marker}",
            preset.name(),
            preset.rules().len()
        );
    }

    println!("\nConfigure rules in snippet-review.toml, e.g.:");
    println!("  [rules.\"CSharp.LongLine\"]");
    println!("  max_length = 100");
}

fn dialects(rule: &RuleBox) -> String {
    let names: Vec<_> = Dialect::ALL
        .into_iter()
        .filter(|d| rule.applies_to(*d))
        .map(Dialect::name)
        .collect();
    if names.len() == Dialect::ALL.len() {
        "any".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippet_review::rules::{CSharpLongLine, DeepNesting, RepeatedLiteral};

    #[test]
    fn dialect_column() {
        let rule: RuleBox = Box::new(CSharpLongLine::new());
        assert_eq!(dialects(&rule), "CSharp");

        let rule: RuleBox = Box::new(DeepNesting::new());
        assert_eq!(dialects(&rule), "CSharp, VBNet, SQL");

        let rule: RuleBox = Box::new(RepeatedLiteral::new());
        assert_eq!(dialects(&rule), "any");
    }
}

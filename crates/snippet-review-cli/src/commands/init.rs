//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# snippet-review configuration

# Rule preset: "full" (default), "rules-only", or "minimal"
preset = "full"

[analyzer]
# Force a dialect instead of detecting it: "csharp", "vbnet", "sql", "unknown"
# dialect = "sql"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules."CSharp.LongLine"]
enabled = true
# severity = "info"  # Override default severity
max_length = 120

[rules."CSharp.NestedIfs"]
max_ifs = 2

[rules."Smell.DeepNesting"]
max_depth = 3

[rules."Smell.LongParameterList"]
max_params = 5

# [rules."Smell.LargeStructure"]
# max_lines = 300
# max_methods = 10

# [rules."Smell.RepeatedLiteral"]
# min_lines = 3

# [rules."Naming.NonDescriptive"]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("snippet-review.toml");
    write_config(config_path, force)?;

    println!("Created snippet-review.toml");
    println!("\nNext steps:");
    println!("  1. Edit snippet-review.toml to configure rules");
    println!("  2. Run: snippet-review check <FILE>");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote {}", config_path.display());
    Ok(())
}

//! Detect command implementation.

use anyhow::Result;
use std::path::Path;

/// Runs the detect command.
pub fn run(path: Option<&Path>) -> Result<()> {
    let text = super::read_input(path)?;
    let dialect = snippet_review::detect(&text);
    tracing::debug!("Detected {} from {} bytes", dialect, text.len());
    println!("{dialect}");
    Ok(())
}

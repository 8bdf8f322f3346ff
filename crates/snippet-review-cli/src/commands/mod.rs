//! Subcommand implementations.

pub mod check;
pub mod detect;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the snippet from `path`, or from stdin when `path` is absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_snippet_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("query.sql");
        fs::write(&path, "SELECT * FROM Orders").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "SELECT * FROM Orders");
    }

    #[test]
    fn missing_file_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.cs");
        let err = read_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("absent.cs"));
    }
}

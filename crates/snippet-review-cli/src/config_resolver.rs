//! Locating and loading `snippet-review.toml`.
//!
//! The first match wins:
//!
//! 1. `--config` flag or `$SNIPPET_REVIEW_CONFIG`
//! 2. `snippet-review.toml` or `.snippet-review.toml` in the working directory
//! 3. `config.toml` in `$SNIPPET_REVIEW_CONFIG_DIR` or `~/.snippet-review/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use snippet_review::Config;
use std::path::{Path, PathBuf};

/// Project-level file names, in priority order.
const PROJECT_FILES: [&str; 2] = ["snippet-review.toml", ".snippet-review.toml"];

/// File name inside the global directory.
const GLOBAL_FILE: &str = "config.toml";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line; trusted even if missing.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Found in the per-user directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the file to read, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the configuration; [`ConfigSource::Default`] yields
    /// [`Config::default`].
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    Search {
        project_dir,
        global_dir: global_config_dir(),
    }
    .resolve(explicit)
}

/// Search roots for one resolution.
struct Search<'a> {
    project_dir: &'a Path,
    global_dir: Option<PathBuf>,
}

impl Search<'_> {
    fn resolve(&self, explicit: Option<&Path>) -> ConfigSource {
        if let Some(p) = explicit {
            return ConfigSource::Explicit(p.to_path_buf());
        }

        if let Some(found) = PROJECT_FILES
            .iter()
            .map(|name| self.project_dir.join(name))
            .find(|p| p.is_file())
        {
            tracing::debug!("Found project config: {}", found.display());
            return ConfigSource::Project(found);
        }

        match self.global_dir.as_ref().map(|d| d.join(GLOBAL_FILE)) {
            Some(found) if found.is_file() => {
                tracing::debug!("Found global config: {}", found.display());
                ConfigSource::Global(found)
            }
            _ => ConfigSource::Default,
        }
    }
}

/// `$SNIPPET_REVIEW_CONFIG_DIR`, else `~/.snippet-review/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os("SNIPPET_REVIEW_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".snippet-review")),
    }
}

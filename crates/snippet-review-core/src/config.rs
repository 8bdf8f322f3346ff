//! `snippet-review.toml` schema.
//!
//! ```toml
//! preset = "full"
//!
//! [analyzer]
//! dialect = "sql"
//!
//! [rules."CSharp.LongLine"]
//! severity = "info"
//! max_length = 100
//! ```

use crate::types::{Dialect, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Review configuration. The default reproduces the built-in behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset name: `full`, `rules-only`, or `minimal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// `[analyzer]` table.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// `[rules."<name>"]` tables, keyed by rule name such as `CSharp.LongLine`.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Same as [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file is unreadable, [`ConfigError::Parse`]
    /// when its contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML, unknown dialects, or
    /// unknown severities.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the `[rules."<name>"]` table, if present.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Rules are enabled unless their table sets `enabled = false`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rule(rule_name).and_then(|c| c.enabled).unwrap_or(true)
    }

    /// Severity every issue of `rule_name` is rewritten to.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rule(rule_name)?.severity
    }

    /// Numeric option of a rule, or `default` when the rule or option is
    /// absent or not a non-negative integer.
    #[must_use]
    pub fn rule_usize(&self, rule_name: &str, key: &str, default: usize) -> usize {
        self.rule(rule_name)
            .map_or(default, |c| c.get_usize(key, default))
    }
}

/// `[analyzer]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Forces a dialect instead of detecting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
}

/// One `[rules."<name>"]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// `false` removes the rule's issues.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Replaces the severity of every issue the rule emits.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Thresholds and other rule-specific keys.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Reads `key` as a non-negative integer.
    #[must_use]
    pub fn get_usize(&self, key: &str, default: usize) -> usize {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(default)
    }
}

/// Failure to load a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// OS error.
        source: std::io::Error,
    },

    /// The contents are not a valid configuration.
    #[error("invalid configuration: {message}")]
    Parse {
        /// Message from the TOML deserializer.
        message: String,
    },
}

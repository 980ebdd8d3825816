//! TOML configuration for banned-import scans.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::group::{BannedImportGroup, GroupError};

/// Top-level configuration for restrict-imports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer settings.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Banned-import rule groups.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Compiles all `[[groups]]` entries into validated rule groups.
    ///
    /// # Errors
    ///
    /// Returns the first pattern compile failure, naming the group and
    /// the offending pattern string.
    pub fn build_groups(&self) -> Result<Vec<BannedImportGroup>, GroupError> {
        self.groups.iter().map(GroupConfig::build).collect()
    }
}

/// Analyzer-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directories to scan (default: current directory).
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// Glob patterns excluded from the scan.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect `.gitignore` files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_true() -> bool {
    true
}

/// One `[[groups]]` entry, the raw shape of a rule group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Group name, shown in reports.
    pub name: String,

    /// Optional free-text reason shown in reports.
    #[serde(default)]
    pub reason: Option<String>,

    /// Optional base package; imports outside it are not evaluated by
    /// this group.
    #[serde(default)]
    pub base_package: Option<String>,

    /// Banned patterns.
    #[serde(default)]
    pub banned: Vec<String>,

    /// Allowed patterns carving exceptions out of the bans.
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl GroupConfig {
    /// Compiles this entry into a validated [`BannedImportGroup`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupError`] when a pattern fails to compile.
    pub fn build(&self) -> Result<BannedImportGroup, GroupError> {
        let mut builder = BannedImportGroup::builder(&self.name)
            .ban_all(self.banned.iter().cloned())
            .allow_all(self.allowed.iter().cloned());
        if let Some(base) = &self.base_package {
            builder = builder.base_package(base);
        }
        if let Some(reason) = &self.reason {
            builder = builder.reason(reason);
        }
        builder.build()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_groups() {
        let config = Config::default();
        assert!(config.groups.is_empty());
        assert!(config.analyzer.respect_gitignore);
        assert_eq!(config.analyzer.roots, vec![PathBuf::from(".")]);
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
[analyzer]
roots = ["src/main/java", "src/test/java"]
exclude = ["**/generated/**"]

[[groups]]
name = "no-junit4"
reason = "Use JUnit 5"
banned = ["org.junit.**"]
allowed = ["org.junit.jupiter.**"]

[[groups]]
name = "no-shaded-guava"
base_package = "com.example.**"
banned = ["com.google.common.**"]
"#;
        let config = Config::parse(toml).expect("config should parse");
        assert_eq!(config.analyzer.roots.len(), 2);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[0].reason.as_deref(), Some("Use JUnit 5"));
        assert_eq!(
            config.groups[1].base_package.as_deref(),
            Some("com.example.**")
        );

        let groups = config.build_groups().expect("groups should build");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name(), "no-junit4");
    }

    #[test]
    fn group_without_name_is_a_parse_error() {
        let toml = r#"
[[groups]]
banned = ["org.junit.**"]
"#;
        assert!(matches!(
            Config::parse(toml),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn bad_pattern_surfaces_group_context() {
        let toml = r#"
[[groups]]
name = "typo"
banned = ["com.fo*o.**"]
"#;
        let config = Config::parse(toml).expect("config should parse");
        let err = config.build_groups().expect_err("build should fail");
        assert!(err.to_string().contains("typo"));
        assert!(err.to_string().contains("com.fo*o.**"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/ri.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

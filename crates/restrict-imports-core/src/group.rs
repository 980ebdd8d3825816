//! Banned-import rule groups and their evaluation.

use miette::Diagnostic;

use crate::parser::ImportStatement;
use crate::pattern::{PackagePattern, PatternError};
use crate::types::MatchedImport;

/// Errors raised when constructing a [`BannedImportGroup`].
///
/// All pattern validation happens here, at configuration time; evaluation
/// assumes well-formed patterns and never fails mid-scan.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum GroupError {
    /// A pattern string in the group failed to compile.
    #[error("group '{group}': invalid pattern '{pattern}': {source}")]
    Pattern {
        /// Name of the group being built.
        group: String,
        /// The pattern string that failed.
        pattern: String,
        /// Underlying compile error.
        source: PatternError,
    },
}

/// A named set of banned and allowed import patterns.
///
/// Groups are constructed once from configuration and are read-only for
/// the duration of a scan; evaluation is a pure function, so groups may
/// be shared freely across concurrent file analyses.
#[derive(Debug, Clone)]
pub struct BannedImportGroup {
    name: String,
    base_package: Option<PackagePattern>,
    banned: Vec<PackagePattern>,
    allowed: Vec<PackagePattern>,
    reason: Option<String>,
}

impl BannedImportGroup {
    /// Starts building a group with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> BannedImportGroupBuilder {
        BannedImportGroupBuilder {
            name: name.into(),
            base_package: None,
            banned: Vec::new(),
            allowed: Vec::new(),
            reason: None,
        }
    }

    /// The group name, shown in reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional free-text reason, shown in reports.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Evaluates one import declaration against this group.
    ///
    /// Returns a [`MatchedImport`] only when the import's final
    /// classification is banned: at least one banned pattern matches and
    /// no allowed pattern matches with specificity greater than or equal
    /// to the most specific matching banned pattern. The allow list
    /// carves exceptions out of a broader ban, so the exception wins on a
    /// specificity tie.
    #[must_use]
    pub fn evaluate(&self, import: &ImportStatement) -> Option<MatchedImport> {
        if let Some(base) = &self.base_package {
            if !base.matches_prefix(&import.path) {
                return None;
            }
        }

        let most_specific = self
            .banned
            .iter()
            .filter(|p| p.matches(&import.path))
            .max_by_key(|p| p.specificity())?;

        let exempted = self
            .allowed
            .iter()
            .any(|p| p.matches(&import.path) && p.specificity() >= most_specific.specificity());
        if exempted {
            return None;
        }

        Some(MatchedImport {
            import_path: import.path.clone(),
            line: import.line,
            matched_pattern: most_specific.as_str().to_owned(),
            group: self.name.clone(),
        })
    }
}

/// Builder for [`BannedImportGroup`].
///
/// Pattern strings are collected as-is and compiled in [`build`], so a
/// bad pattern is reported with the group name and the original string.
///
/// [`build`]: BannedImportGroupBuilder::build
#[derive(Debug)]
pub struct BannedImportGroupBuilder {
    name: String,
    base_package: Option<String>,
    banned: Vec<String>,
    allowed: Vec<String>,
    reason: Option<String>,
}

impl BannedImportGroupBuilder {
    /// Restricts the group to imports under the given base package.
    #[must_use]
    pub fn base_package(mut self, pattern: impl Into<String>) -> Self {
        self.base_package = Some(pattern.into());
        self
    }

    /// Adds a banned pattern.
    #[must_use]
    pub fn ban(mut self, pattern: impl Into<String>) -> Self {
        self.banned.push(pattern.into());
        self
    }

    /// Adds several banned patterns.
    #[must_use]
    pub fn ban_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banned.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an allowed pattern carving an exception out of the bans.
    #[must_use]
    pub fn allow(mut self, pattern: impl Into<String>) -> Self {
        self.allowed.push(pattern.into());
        self
    }

    /// Adds several allowed patterns.
    #[must_use]
    pub fn allow_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the free-text reason shown in reports.
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Compiles all patterns and builds the group.
    ///
    /// A group without banned patterns is valid and never matches.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Pattern`] for the first pattern that fails
    /// to compile, naming the group and the pattern string.
    pub fn build(self) -> Result<BannedImportGroup, GroupError> {
        let compile = |pattern: &str, group: &str| {
            PackagePattern::parse(pattern).map_err(|source| GroupError::Pattern {
                group: group.to_owned(),
                pattern: pattern.to_owned(),
                source,
            })
        };

        let base_package = self
            .base_package
            .as_deref()
            .map(|p| compile(p, &self.name))
            .transpose()?;

        let banned = self
            .banned
            .iter()
            .map(|p| compile(p, &self.name))
            .collect::<Result<Vec<_>, _>>()?;

        let allowed = self
            .allowed
            .iter()
            .map(|p| compile(p, &self.name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BannedImportGroup {
            name: self.name,
            base_package,
            banned,
            allowed,
            reason: self.reason,
        })
    }
}

//! Result types for banned-import analysis.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A banned import found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedImport {
    /// The import path as written in the source.
    pub import_path: String,
    /// 1-based line number of the declaration.
    pub line: usize,
    /// Source string of the banned pattern that matched.
    pub matched_pattern: String,
    /// Name of the rule group that produced the match.
    pub group: String,
}

/// All banned imports found in one source file, in ascending line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMatch {
    /// Path of the offending source file.
    pub source_file: PathBuf,
    /// Matches ordered by line number; declaration order is preserved
    /// for imports on the same line.
    pub matched_imports: Vec<MatchedImport>,
}

/// Result of scanning a set of root directories.
///
/// Contains one [`FileMatch`] per file with at least one violation; clean
/// files are omitted entirely rather than included with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    /// Per-file matches, sorted by source file path.
    pub file_matches: Vec<FileMatch>,
    /// Number of files that were read and tokenized.
    pub files_scanned: usize,
}

impl AnalyzeResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no file produced a match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_matches.is_empty()
    }

    /// Total number of matched imports across all files.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.file_matches.iter().map(|f| f.matched_imports.len()).sum()
    }

    /// Returns `true` when any match was produced by the named group.
    #[must_use]
    pub fn has_matches_for(&self, group: &str) -> bool {
        self.file_matches
            .iter()
            .flat_map(|f| &f.matched_imports)
            .any(|m| m.group == group)
    }
}

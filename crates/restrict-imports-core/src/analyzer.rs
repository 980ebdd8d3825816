//! Analyzer orchestrating file discovery, tokenization, and group
//! evaluation.

use crate::group::BannedImportGroup;
use crate::parser::{ImportStatement, TokenizerRegistry};
use crate::types::{AnalyzeResult, FileMatch};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while setting up or running a scan.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving roots.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while walking a root directory.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    roots: Vec<PathBuf>,
    groups: Vec<BannedImportGroup>,
    exclude_patterns: Vec<String>,
    registry: Option<TokenizerRegistry>,
    respect_gitignore: Option<bool>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root directory to scan.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Adds several root directories.
    #[must_use]
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds a rule group.
    #[must_use]
    pub fn group(mut self, group: BannedImportGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Adds several rule groups.
    #[must_use]
    pub fn groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = BannedImportGroup>,
    {
        self.groups.extend(groups);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Replaces the default tokenizer registry.
    #[must_use]
    pub fn registry(mut self, registry: TokenizerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets whether discovery respects `.gitignore` files (default: true).
    #[must_use]
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = Some(respect);
        self
    }

    /// Builds the analyzer.
    ///
    /// Relative roots are resolved against the current directory; with no
    /// root configured the current directory is scanned.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let mut roots = self.roots;
        if roots.is_empty() {
            roots.push(PathBuf::from("."));
        }

        let cwd = std::env::current_dir()?;
        let roots = roots
            .into_iter()
            .map(|r| if r.is_absolute() { r } else { cwd.join(r) })
            .collect();

        let mut exclude_patterns = self.exclude_patterns;
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/build/**".to_owned(), "**/target/**".to_owned()]);
        }

        Ok(Analyzer {
            roots,
            groups: self.groups,
            exclude_patterns,
            registry: self.registry.unwrap_or_default(),
            respect_gitignore: self.respect_gitignore.unwrap_or(true),
        })
    }
}

/// Scans root directories for banned imports.
///
/// Use [`Analyzer::builder()`] to construct an instance. The analyzer,
/// its groups, and its registry are read-only during a scan.
pub struct Analyzer {
    roots: Vec<PathBuf>,
    groups: Vec<BannedImportGroup>,
    exclude_patterns: Vec<String>,
    registry: TokenizerRegistry,
    respect_gitignore: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// The root directories being scanned.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Number of configured rule groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Scans all roots and returns the aggregated result.
    ///
    /// Files that cannot be read (missing, permission, not UTF-8) are
    /// logged and skipped; a scan never aborts over a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal itself fails.
    pub fn analyze(&self) -> Result<AnalyzeResult, AnalyzerError> {
        info!("Starting scan of {} root(s)", self.roots.len());

        let files = self.discover_files()?;
        info!("Found {} files to scan", files.len());

        let mut result = AnalyzeResult::new();
        for file in &files {
            let content = match std::fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    continue;
                }
            };
            result.files_scanned += 1;
            if let Some(file_match) = self.analyze_file(file, &content) {
                result.file_matches.push(file_match);
            }
        }

        // Discovery order depends on the walker; sort for reproducible
        // reports.
        result.file_matches.sort_by(|a, b| a.source_file.cmp(&b.source_file));

        info!(
            "Scan complete: {} banned import(s) in {} of {} file(s)",
            result.total_matches(),
            result.file_matches.len(),
            result.files_scanned
        );

        Ok(result)
    }

    /// Analyzes one file's content against every configured group.
    ///
    /// Pure with respect to the filesystem: the caller supplies the
    /// content, so concurrent callers can share the analyzer freely.
    /// Returns `None` for clean files and for extensions no tokenizer
    /// claims.
    #[must_use]
    pub fn analyze_file(&self, path: &Path, content: &str) -> Option<FileMatch> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        let tokenizer = self.registry.for_extension(extension)?;
        debug!("Analyzing: {}", path.display());

        let mut imports: Vec<ImportStatement> = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            imports.extend(tokenizer.parse_imports(line.trim(), idx + 1));
        }

        // Imports arrive in line order, so matches are already ascending
        // by line with declaration order preserved within a line.
        let mut matched_imports = Vec::new();
        for import in &imports {
            for group in &self.groups {
                if let Some(matched) = group.evaluate(import) {
                    matched_imports.push(matched);
                }
            }
        }

        if matched_imports.is_empty() {
            return None;
        }
        Some(FileMatch {
            source_file: path.to_path_buf(),
            matched_imports,
        })
    }

    /// Discovers files under the roots whose extension a tokenizer claims.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();

        for root in &self.roots {
            let mut builder = ignore::WalkBuilder::new(root);
            builder.hidden(false).git_ignore(self.respect_gitignore);

            for entry in builder.build() {
                let entry = entry?;
                let path = entry.path();

                if !path.is_file() {
                    continue;
                }
                let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                if self.registry.for_extension(extension).is_none() {
                    continue;
                }
                if self.should_exclude(path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Checks a path against the exclude patterns.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/build/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn junit_group() -> BannedImportGroup {
        BannedImportGroup::builder("no-junit4")
            .ban("org.junit.**")
            .allow("org.junit.jupiter.**")
            .reason("Use JUnit 5")
            .build()
            .expect("group should build")
    }

    fn analyzer_for(root: &Path) -> Analyzer {
        Analyzer::builder()
            .root(root)
            .group(junit_group())
            .build()
            .expect("analyzer should build")
    }

    #[test]
    fn finds_banned_imports_in_tree() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(
            tmp.path().join("Legacy.java"),
            "package com.example;\nimport org.junit.Test;\n",
        )
        .expect("write");

        let result = analyzer_for(tmp.path()).analyze().expect("scan");
        assert_eq!(result.file_matches.len(), 1);
        let matched = &result.file_matches[0].matched_imports;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].import_path, "org.junit.Test");
        assert_eq!(matched[0].line, 2);
    }

    #[test]
    fn clean_files_are_omitted() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(
            tmp.path().join("Modern.java"),
            "package com.example;\nimport org.junit.jupiter.api.Test;\n",
        )
        .expect("write");

        let result = analyzer_for(tmp.path()).analyze().expect("scan");
        assert!(result.is_empty());
        assert_eq!(result.files_scanned, 1);
    }

    #[test]
    fn results_are_sorted_by_file_path() {
        let tmp = TempDir::new().expect("tempdir");
        for name in ["Zeta.java", "Alpha.java", "Mid.java"] {
            fs::write(tmp.path().join(name), "import org.junit.Test;\n").expect("write");
        }

        let result = analyzer_for(tmp.path()).analyze().expect("scan");
        let names: Vec<String> = result
            .file_matches
            .iter()
            .filter_map(|f| f.source_file.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["Alpha.java", "Mid.java", "Zeta.java"]);
    }

    #[test]
    fn unclaimed_extensions_are_skipped() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("notes.txt"), "import org.junit.Test;\n").expect("write");

        let result = analyzer_for(tmp.path()).analyze().expect("scan");
        assert!(result.is_empty());
        assert_eq!(result.files_scanned, 0);
    }

    #[test]
    fn excluded_paths_are_skipped() {
        let tmp = TempDir::new().expect("tempdir");
        let generated = tmp.path().join("generated");
        fs::create_dir(&generated).expect("mkdir");
        fs::write(generated.join("Gen.java"), "import org.junit.Test;\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .group(junit_group())
            .exclude("**/generated/**")
            .build()
            .expect("analyzer should build");

        let result = analyzer.analyze().expect("scan");
        assert!(result.is_empty());
    }

    #[test]
    fn unreadable_files_do_not_abort_the_scan() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("Bad.java"), [0xC3u8, 0x28]).expect("write");
        fs::write(tmp.path().join("Good.java"), "import org.junit.Test;\n").expect("write");

        let result = analyzer_for(tmp.path()).analyze().expect("scan");
        assert_eq!(result.file_matches.len(), 1);
        assert_eq!(result.files_scanned, 1);
    }

    #[test]
    fn analyze_file_is_pure_over_content() {
        let analyzer = Analyzer::builder()
            .group(junit_group())
            .build()
            .expect("analyzer should build");

        let content = "import org.junit.Test; import org.junit.Assert;\n";
        let first = analyzer.analyze_file(Path::new("X.java"), content);
        let second = analyzer.analyze_file(Path::new("X.java"), content);
        assert_eq!(first, second);

        let matched = first.expect("match").matched_imports;
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].import_path, "org.junit.Test");
        assert_eq!(matched[1].import_path, "org.junit.Assert");
        assert_eq!(matched[0].line, 1);
        assert_eq!(matched[1].line, 1);
    }

    #[test]
    fn every_group_sees_every_import() {
        let sql = BannedImportGroup::builder("no-jdbc")
            .ban("java.sql.**")
            .build()
            .expect("group should build");

        let analyzer = Analyzer::builder()
            .group(junit_group())
            .group(sql)
            .build()
            .expect("analyzer should build");

        let content = "import org.junit.Test;\nimport java.sql.Connection;\n";
        let matched = analyzer
            .analyze_file(Path::new("Mixed.java"), content)
            .expect("match")
            .matched_imports;

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].group, "no-junit4");
        assert_eq!(matched[1].group, "no-jdbc");
    }
}

//! Per-language line tokenizers for import and package declarations.
//!
//! [`LanguageTokenizer`] is the extension point for adding new languages.
//! Tokenizers work line by line and are total: a line they cannot classify
//! yields an empty declaration list, never an error. Source files are
//! scanned without full grammar validation, so malformed input must not
//! abort a scan.

mod groovy;
mod java;
mod kotlin;

pub use groovy::GroovyTokenizer;
pub use java::JavaTokenizer;
pub use kotlin::KotlinTokenizer;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single import declaration extracted from one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// Dotted import path (e.g. `java.util.List`).
    pub path: String,
    /// 1-based line number the declaration appeared on.
    pub line: usize,
}

impl ImportStatement {
    /// Creates a new import statement.
    #[must_use]
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

/// Trait for language-specific line tokenizers.
///
/// Implement this to teach the analyzer a new language. The analyzer
/// trims each line before handing it over.
pub trait LanguageTokenizer: Send + Sync {
    /// Language identifier (e.g. `"java"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this tokenizer handles, without the leading dot
    /// (e.g. `&["java"]`). Lookup is an exact, case-sensitive match.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses a package declaration from a trimmed source line.
    fn parse_package(&self, line: &str) -> Option<String>;

    /// Parses import declarations from a trimmed source line.
    ///
    /// A single physical line may hold several statements; every returned
    /// declaration carries the same `line_number`.
    fn parse_imports(&self, line: &str, line_number: usize) -> Vec<ImportStatement>;
}

/// Fully-qualified identifier: identifier segments joined by dots.
/// The `+` on the dotted tail enforces at least two segments.
static QUALIFIED_IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}_$][\p{L}\p{N}_$]*(?:\.[\p{L}_$][\p{L}\p{N}_$]*)+")
        .expect("qualified identifier regex is valid")
});

/// Scans an arbitrary line for fully-qualified references.
///
/// Fallback for lines that are neither package nor import statements, to
/// catch qualified type usage outside a rigid import grammar. Single-
/// segment identifiers are not import candidates and are skipped.
pub(crate) fn scan_qualified_identifiers(line: &str, line_number: usize) -> Vec<ImportStatement> {
    QUALIFIED_IDENT
        .find_iter(line)
        .map(|m| ImportStatement::new(m.as_str(), line_number))
        .collect()
}

/// Registry of language tokenizers keyed by file extension.
pub struct TokenizerRegistry {
    tokenizers: Vec<Box<dyn LanguageTokenizer>>,
}

impl TokenizerRegistry {
    /// Creates a registry with no languages registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tokenizers: Vec::new(),
        }
    }

    /// Registers a tokenizer. Later registrations do not shadow earlier
    /// ones for extensions they share.
    pub fn register(&mut self, tokenizer: Box<dyn LanguageTokenizer>) {
        self.tokenizers.push(tokenizer);
    }

    /// Looks up the tokenizer for a file extension (without the dot).
    ///
    /// The match is exact and case-sensitive: `"java"` does not match
    /// `"JAVA"`.
    #[must_use]
    pub fn for_extension(&self, extension: &str) -> Option<&dyn LanguageTokenizer> {
        self.tokenizers
            .iter()
            .find(|t| t.extensions().contains(&extension))
            .map(|t| &**t)
    }

    /// Iterates over all registered tokenizers.
    pub fn tokenizers(&self) -> impl Iterator<Item = &dyn LanguageTokenizer> {
        self.tokenizers.iter().map(|t| &**t)
    }
}

impl Default for TokenizerRegistry {
    /// Registry with all built-in languages.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(JavaTokenizer::new()));
        registry.register(Box::new(KotlinTokenizer::new()));
        registry.register(Box::new(GroovyTokenizer::new()));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_resolves_builtin_extensions() {
        let registry = TokenizerRegistry::default();
        assert_eq!(
            registry.for_extension("java").map(|t| t.language_id()),
            Some("java")
        );
        assert_eq!(
            registry.for_extension("kt").map(|t| t.language_id()),
            Some("kotlin")
        );
        assert_eq!(
            registry.for_extension("groovy").map(|t| t.language_id()),
            Some("groovy")
        );
    }

    #[test]
    fn extension_lookup_is_case_sensitive() {
        let registry = TokenizerRegistry::default();
        assert!(registry.for_extension("JAVA").is_none());
        assert!(registry.for_extension("Kt").is_none());
    }

    #[test]
    fn unknown_extension_resolves_to_none() {
        let registry = TokenizerRegistry::default();
        assert!(registry.for_extension("rs").is_none());
        assert!(registry.for_extension("").is_none());
    }

    #[test]
    fn empty_registry_has_no_tokenizers() {
        let registry = TokenizerRegistry::empty();
        assert!(registry.for_extension("java").is_none());
        assert_eq!(registry.tokenizers().count(), 0);
    }

    #[test]
    fn qualified_scan_skips_single_segments() {
        let found = scan_qualified_identifiers("List foo = bar;", 3);
        assert!(found.is_empty());
    }

    #[test]
    fn qualified_scan_finds_dotted_references() {
        let found = scan_qualified_identifiers("com.foo.Bar x = util.Factory.make();", 7);
        let paths: Vec<&str> = found.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["com.foo.Bar", "util.Factory.make"]);
        assert!(found.iter().all(|s| s.line == 7));
    }
}

//! Java line tokenizer.

use crate::parser::{scan_qualified_identifiers, ImportStatement, LanguageTokenizer};

const IMPORT_KEYWORD: &str = "import ";
const PACKAGE_KEYWORD: &str = "package ";

/// Tokenizes Java source lines into package and import declarations.
///
/// A line is a package or import declaration iff it starts with the
/// keyword and ends with `;`. Anything else falls back to a scan for
/// fully-qualified references, which catches qualified type usage.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaTokenizer;

impl JavaTokenizer {
    /// Creates a new Java tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_package(line: &str) -> bool {
        line.starts_with(PACKAGE_KEYWORD) && line.ends_with(';')
    }

    fn is_import(line: &str) -> bool {
        line.starts_with(IMPORT_KEYWORD) && line.ends_with(';')
    }
}

impl LanguageTokenizer for JavaTokenizer {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse_package(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if !Self::is_package(line) {
            return None;
        }
        let name = line[PACKAGE_KEYWORD.len()..].split(';').next()?.trim();
        (!name.is_empty()).then(|| name.to_owned())
    }

    fn parse_imports(&self, line: &str, line_number: usize) -> Vec<ImportStatement> {
        let line = line.trim();
        if !Self::is_import(line) {
            if Self::is_package(line) {
                return Vec::new();
            }
            return scan_qualified_identifiers(line, line_number);
        }

        // One physical line may hold several `;`-terminated statements.
        line.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.strip_prefix(IMPORT_KEYWORD))
            .map(|s| ImportStatement::new(s.trim(), line_number))
            .collect()
    }
}

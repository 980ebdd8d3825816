//! Groovy line tokenizer.
//!
//! Same statement grammar as Java with the terminator optional.

use crate::parser::{scan_qualified_identifiers, ImportStatement, LanguageTokenizer};

const IMPORT_KEYWORD: &str = "import ";
const PACKAGE_KEYWORD: &str = "package ";

/// Tokenizes Groovy source lines into package and import declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroovyTokenizer;

impl GroovyTokenizer {
    /// Creates a new Groovy tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LanguageTokenizer for GroovyTokenizer {
    fn language_id(&self) -> &'static str {
        "groovy"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["groovy"]
    }

    fn parse_package(&self, line: &str) -> Option<String> {
        let rest = line.trim().strip_prefix(PACKAGE_KEYWORD)?;
        let name = rest.split(';').next()?.trim();
        (!name.is_empty()).then(|| name.to_owned())
    }

    fn parse_imports(&self, line: &str, line_number: usize) -> Vec<ImportStatement> {
        let line = line.trim();
        if !line.starts_with(IMPORT_KEYWORD) {
            if line.starts_with(PACKAGE_KEYWORD) {
                return Vec::new();
            }
            return scan_qualified_identifiers(line, line_number);
        }

        line.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.strip_prefix(IMPORT_KEYWORD))
            .map(|s| ImportStatement::new(s.trim(), line_number))
            .collect()
    }
}

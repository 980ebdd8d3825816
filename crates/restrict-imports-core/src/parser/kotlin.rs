//! Kotlin line tokenizer.
//!
//! Kotlin drops the statement terminator in idiomatic code and allows
//! renaming imports (`import a.b.C as D`), so the Java-family rules are
//! relaxed: the trailing `;` is optional and an alias clause is cut off.

use crate::parser::{scan_qualified_identifiers, ImportStatement, LanguageTokenizer};

const IMPORT_KEYWORD: &str = "import ";
const PACKAGE_KEYWORD: &str = "package ";
const ALIAS_KEYWORD: &str = " as ";

/// Tokenizes Kotlin source lines into package and import declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct KotlinTokenizer;

impl KotlinTokenizer {
    /// Creates a new Kotlin tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Strips an `as Alias` clause; the banned name is the imported path.
    fn strip_alias(fragment: &str) -> &str {
        match fragment.find(ALIAS_KEYWORD) {
            Some(idx) => &fragment[..idx],
            None => fragment,
        }
    }
}

impl LanguageTokenizer for KotlinTokenizer {
    fn language_id(&self) -> &'static str {
        "kotlin"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["kt", "kts"]
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
            .map(|s| ImportStatement::new(Self::strip_alias(s).trim(), line_number))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imports(line: &str) -> Vec<String> {
        KotlinTokenizer::new()
            .parse_imports(line, 1)
            .into_iter()
            .map(|s| s.path)
            .collect()
    }

    #[test]
    fn parses_package_without_terminator() {
        let t = KotlinTokenizer::new();
        assert_eq!(
            t.parse_package("package com.example.domain"),
            Some("com.example.domain".to_owned())
        );
    }

    #[test]
    fn parses_package_with_terminator() {
        let t = KotlinTokenizer::new();
        assert_eq!(
            t.parse_package("package com.example.domain;"),
            Some("com.example.domain".to_owned())
        );
    }

    #[test]
    fn parses_import_without_terminator() {
        assert_eq!(
            imports("import com.example.domain.User"),
            vec!["com.example.domain.User"]
        );
    }

    #[test]
    fn strips_import_alias() {
        assert_eq!(
            imports("import com.example.domain.User as DomainUser"),
            vec!["com.example.domain.User"]
        );
    }

    #[test]
    fn parses_multiple_statements_on_one_line() {
        let found = KotlinTokenizer::new().parse_imports("import a.b.C; import d.e.F", 4);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.line == 4));
        assert_eq!(found[1].path, "d.e.F");
    }

    #[test]
    fn package_line_yields_no_imports() {
        assert!(imports("package com.example.domain").is_empty());
    }

    #[test]
    fn qualified_usage_is_picked_up_by_fallback() {
        assert_eq!(
            imports("val flow = kotlinx.coroutines.flow.flowOf(1)"),
            vec!["kotlinx.coroutines.flow.flowOf"]
        );
    }

    #[test]
    fn malformed_line_yields_empty_list() {
        assert!(imports("}").is_empty());
        assert!(imports("fun main() {").is_empty());
    }
}

//! Text report rendering for analysis results.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::group::BannedImportGroup;
use crate::types::AnalyzeResult;

/// Formats all matches as the canonical banned-imports report.
///
/// Each group with matches gets its own section headed by its optional
/// `Reason:` line. File paths are relativized against the first root
/// that contains them; paths outside every root print as-is.
#[must_use]
pub fn format_matches(
    roots: &[PathBuf],
    result: &AnalyzeResult,
    groups: &[BannedImportGroup],
) -> String {
    let mut out = String::from("\nBanned imports detected:\n");

    for group in groups {
        if !result.has_matches_for(group.name()) {
            continue;
        }

        if let Some(reason) = group.reason() {
            if !reason.is_empty() {
                let _ = writeln!(out, "Reason: {reason}");
            }
        }

        for file_match in &result.file_matches {
            let in_group: Vec<_> = file_match
                .matched_imports
                .iter()
                .filter(|m| m.group == group.name())
                .collect();
            if in_group.is_empty() {
                continue;
            }

            let _ = writeln!(
                out,
                "\tin file: {}",
                relativize(roots, &file_match.source_file).display()
            );
            for matched in in_group {
                let _ = writeln!(out, "\t\t{} (Line: {})", matched.matched_pattern, matched.line);
            }
        }
    }

    out
}

/// Strips the first containing root from the path.
fn relativize<'a>(roots: &[PathBuf], path: &'a Path) -> &'a Path {
    for root in roots {
        if let Ok(relative) = path.strip_prefix(root) {
            return relative;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::BannedImportGroup;
    use crate::types::{FileMatch, MatchedImport};

    fn junit_group() -> BannedImportGroup {
        BannedImportGroup::builder("no-junit4")
            .ban("org.junit.**")
            .reason("Use JUnit 5")
            .build()
            .expect("group should build")
    }

    fn sample_result() -> AnalyzeResult {
        AnalyzeResult {
            file_matches: vec![FileMatch {
                source_file: PathBuf::from("/project/src/com/example/LegacyTest.java"),
                matched_imports: vec![
                    MatchedImport {
                        import_path: "org.junit.Test".to_owned(),
                        line: 3,
                        matched_pattern: "org.junit.**".to_owned(),
                        group: "no-junit4".to_owned(),
                    },
                    MatchedImport {
                        import_path: "org.junit.Assert".to_owned(),
                        line: 4,
                        matched_pattern: "org.junit.**".to_owned(),
                        group: "no-junit4".to_owned(),
                    },
                ],
            }],
            files_scanned: 5,
        }
    }

    #[test]
    fn renders_reason_file_and_lines() {
        let roots = vec![PathBuf::from("/project/src")];
        let report = format_matches(&roots, &sample_result(), &[junit_group()]);
        assert_eq!(
            report,
            "\nBanned imports detected:\n\
             Reason: Use JUnit 5\n\
             \tin file: com/example/LegacyTest.java\n\
             \t\torg.junit.** (Line: 3)\n\
             \t\torg.junit.** (Line: 4)\n"
        );
    }

    #[test]
    fn reason_line_is_omitted_when_absent() {
        let group = BannedImportGroup::builder("no-junit4")
            .ban("org.junit.**")
            .build()
            .expect("group should build");
        let report = format_matches(&[], &sample_result(), &[group]);
        assert!(!report.contains("Reason:"));
        assert!(report.contains("in file: /project/src/com/example/LegacyTest.java"));
    }

    #[test]
    fn groups_without_matches_are_omitted() {
        let silent = BannedImportGroup::builder("unused")
            .ban("x.y.**")
            .reason("never printed")
            .build()
            .expect("group should build");
        let report = format_matches(&[], &sample_result(), &[junit_group(), silent]);
        assert!(!report.contains("never printed"));
    }

    #[test]
    fn path_outside_roots_prints_unchanged() {
        let roots = vec![PathBuf::from("/elsewhere")];
        let report = format_matches(&roots, &sample_result(), &[junit_group()]);
        assert!(report.contains("in file: /project/src/com/example/LegacyTest.java"));
    }
}

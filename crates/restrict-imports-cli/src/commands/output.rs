//! Shared output formatting for scan results.

use anyhow::Result;
use restrict_imports_core::{format_matches, AnalyzeResult, BannedImportGroup};
use std::path::PathBuf;

use crate::OutputFormat;

/// Print scan results in the specified format.
pub fn print(
    roots: &[PathBuf],
    result: &AnalyzeResult,
    groups: &[BannedImportGroup],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(roots, result, groups),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(roots: &[PathBuf], result: &AnalyzeResult, groups: &[BannedImportGroup]) {
    if result.is_empty() {
        println!(
            "\x1b[32mNo banned imports detected in {} file(s)\x1b[0m",
            result.files_scanned
        );
        return;
    }

    print!("{}", format_matches(roots, result, groups));
    println!(
        "\n\x1b[31mFound {} banned import(s) in {} of {} file(s)\x1b[0m",
        result.total_matches(),
        result.file_matches.len(),
        result.files_scanned
    );
}

fn print_json(result: &AnalyzeResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &AnalyzeResult) {
    for file_match in &result.file_matches {
        for matched in &file_match.matched_imports {
            println!(
                "{}:{}: {} matches {} [{}]",
                file_match.source_file.display(),
                matched.line,
                matched.import_path,
                matched.matched_pattern,
                matched.group,
            );
        }
    }
}

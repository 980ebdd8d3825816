//! List languages command implementation.

use restrict_imports_core::parser::TokenizerRegistry;

/// Runs the list-languages command.
pub fn run() {
    let registry = TokenizerRegistry::default();

    println!("Supported languages:\n");
    println!("{:<12} Extensions", "Language");
    println!("{}", "-".repeat(40));

    for tokenizer in registry.tokenizers() {
        println!(
            "{:<12} {}",
            tokenizer.language_id(),
            tokenizer.extensions().join(", ")
        );
    }

    println!("\nFile-to-language selection is an exact, case-sensitive");
    println!("extension match; files with other extensions are skipped.");
}

//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# restrict-imports configuration
# See https://github.com/restrict-imports/restrict-imports-rs for documentation

[analyzer]
# Root directories to scan (default: current directory)
# roots = ["src/main/java", "src/test/java"]

# Glob patterns to exclude from the scan
exclude = [
    "**/build/**",
    "**/target/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule groups
# Each group names a set of banned patterns; allowed patterns carve
# exceptions out of the bans.

[[groups]]
name = "no-junit4"
reason = "Use JUnit 5"
banned = ["org.junit.**"]
allowed = ["org.junit.jupiter.**"]

# [[groups]]
# name = "no-internal-api"
# base_package = "com.example.**"
# banned = ["**.internal.**"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("restrict-imports.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created restrict-imports.toml");
    println!("\nNext steps:");
    println!("  1. Edit restrict-imports.toml to configure rule groups");
    println!("  2. Run: restrict-imports check");

    Ok(())
}

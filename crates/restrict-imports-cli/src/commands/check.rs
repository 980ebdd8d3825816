//! Check command implementation.

use anyhow::{Context, Result};
use restrict_imports_core::{Analyzer, Config};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => {
            anyhow::bail!(
                "No restrict-imports.toml found. Run `restrict-imports init` to create one."
            )
        }
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let groups = config
        .build_groups()
        .context("Invalid rule group configuration")?;

    // Roots in the config are relative to the project directory
    let roots: Vec<PathBuf> = config
        .analyzer
        .roots
        .iter()
        .map(|r| if r.is_absolute() { r.clone() } else { path.join(r) })
        .collect();

    let mut builder = Analyzer::builder()
        .roots(roots.clone())
        .groups(groups.clone())
        .excludes(config.analyzer.exclude.clone())
        .respect_gitignore(config.analyzer.respect_gitignore);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Scanning {} root(s) with {} group(s)",
        analyzer.roots().len(),
        analyzer.group_count()
    );

    let result = analyzer.analyze().context("Scan failed")?;

    super::output::print(&roots, &result, &groups, format)?;

    // The core only classifies; failing the invocation is this layer's
    // policy.
    if !result.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

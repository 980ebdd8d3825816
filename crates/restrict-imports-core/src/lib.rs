//! # restrict-imports-core
//!
//! Core library for detecting banned imports in source trees.
//!
//! Source files are tokenized line by line into import declarations,
//! which are evaluated against named groups of banned/allowed
//! segment-wildcard patterns. The result is a per-file record of every
//! violation, consumed by a reporting front end.
//!
//! - [`PackagePattern`] compiles `com.example.**`-style patterns
//! - [`BannedImportGroup`] evaluates imports against one rule group
//! - [`parser`] holds the per-language tokenizers and their registry
//! - [`Analyzer`] scans root directories and aggregates [`AnalyzeResult`]
//!
//! ## Example
//!
//! ```ignore
//! use restrict_imports_core::{Analyzer, BannedImportGroup};
//!
//! let group = BannedImportGroup::builder("no-junit4")
//!     .ban("org.junit.**")
//!     .allow("org.junit.jupiter.**")
//!     .reason("Use JUnit 5")
//!     .build()?;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src/main/java")
//!     .group(group)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod group;
mod pattern;
mod report;
mod types;

/// Per-language tokenizers for import extraction.
pub mod parser;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, GroupConfig};
pub use group::{BannedImportGroup, BannedImportGroupBuilder, GroupError};
pub use pattern::{PackagePattern, PatternError};
pub use report::format_matches;
pub use types::{AnalyzeResult, FileMatch, MatchedImport};

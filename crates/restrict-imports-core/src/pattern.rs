//! Segment-wildcard patterns over dotted import paths.
//!
//! A pattern like `com.example.**` is compiled once into a small list of
//! segment instructions and then matched against import paths without
//! further allocation. `*` matches exactly one path segment, `**` matches
//! zero or more.

use miette::Diagnostic;

/// One compiled element of a [`PackagePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this path segment.
    Literal(String),
    /// `*` - matches any single segment.
    Single,
    /// `**` - matches zero or more segments.
    Multi,
}

/// Errors raised when compiling a pattern string.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("pattern is empty")]
    Empty,

    /// A segment between two delimiters was empty (e.g. `com..foo`).
    #[error("pattern '{pattern}' contains an empty segment")]
    EmptySegment {
        /// The offending pattern string.
        pattern: String,
    },

    /// A wildcard appeared inside a segment instead of standing alone.
    #[error("pattern '{pattern}': wildcard must be the whole segment, found '{segment}'")]
    #[diagnostic(help("use '*' for one segment or '**' for any number of segments"))]
    PartialWildcard {
        /// The offending pattern string.
        pattern: String,
        /// The segment containing the stray wildcard.
        segment: String,
    },
}

/// A compiled segment-wildcard expression over a dotted or slash-delimited
/// import path.
///
/// Patterns are immutable once compiled; matching is a pure function of
/// the pattern and the import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePattern {
    raw: String,
    segments: Vec<Segment>,
    specificity: usize,
}

impl PackagePattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern is empty, has an empty
    /// segment, or uses a wildcard as part of a larger segment.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let raw = pattern.trim();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut segments = Vec::new();
        for part in split_path(raw) {
            let segment = match part {
                "" => {
                    return Err(PatternError::EmptySegment {
                        pattern: raw.to_owned(),
                    })
                }
                "*" => Segment::Single,
                "**" => Segment::Multi,
                s if s.contains('*') => {
                    return Err(PatternError::PartialWildcard {
                        pattern: raw.to_owned(),
                        segment: s.to_owned(),
                    })
                }
                s => Segment::Literal(s.to_owned()),
            };
            segments.push(segment);
        }

        let specificity = segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();

        Ok(Self {
            raw: raw.to_owned(),
            segments,
            specificity,
        })
    }

    /// Tests whether the whole import path matches this pattern.
    #[must_use]
    pub fn matches(&self, import_path: &str) -> bool {
        let parts = path_parts(import_path);
        match_from(&self.segments, &parts, false)
    }

    /// Tests whether this pattern matches a leading portion of the path.
    ///
    /// Used for base-package gating: `com.example` prefix-matches
    /// `com.example.util.List` without matching it fully.
    #[must_use]
    pub fn matches_prefix(&self, import_path: &str) -> bool {
        let parts = path_parts(import_path);
        match_from(&self.segments, &parts, true)
    }

    /// Number of literal (non-wildcard) segments.
    ///
    /// Used as the specificity measure when banned and allowed patterns
    /// both match the same import.
    #[must_use]
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    /// The original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for PackagePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(['.', '/'])
}

fn path_parts(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        split_path(path).collect()
    }
}

/// Walks pattern segments against path segments.
///
/// `**` tries every split point of the remaining path, so a non-trailing
/// multi-wildcard backtracks until the rest of the pattern fits. With
/// `prefix` set, an exhausted pattern accepts any remaining path tail.
fn match_from(pattern: &[Segment], path: &[&str], prefix: bool) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return prefix || path.is_empty();
    };

    match head {
        Segment::Multi => (0..=path.len()).any(|skip| match_from(rest, &path[skip..], prefix)),
        Segment::Single => path
            .split_first()
            .is_some_and(|(_, tail)| match_from(rest, tail, prefix)),
        Segment::Literal(lit) => path
            .split_first()
            .is_some_and(|(part, tail)| *part == lit.as_str() && match_from(rest, tail, prefix)),
    }
}

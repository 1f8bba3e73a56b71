//! Path pattern matching logic.
//!
//! # Responsibilities
//! - Parse route patterns like `/hello/:name` into segments
//! - Match request paths segment by segment
//! - Bind `:name` captures into a parameter map
//!
//! # Design Decisions
//! - Matching is purely syntactic: captured values are raw strings,
//!   never decoded or validated
//! - A `:name` segment matches any single non-empty segment
//! - No regex to guarantee O(n) matching

use std::collections::HashMap;

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches the segment text exactly (case-sensitive).
    Literal(String),
    /// Matches any non-empty segment and binds it under the given name.
    Param(String),
}

/// Parameters captured from a matched request path.
///
/// Values are the raw path segments, passed through byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: HashMap<String, String>,
}

impl PathParams {
    /// Look up a captured parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string. Segments starting with `:` become
    /// named parameters; everything else matches literally.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the captured parameters on a match, or `None` if the
    /// path has a different shape. An empty segment never matches a
    /// parameter, so `/hello/` does not match `/hello/:name`.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let segments = split_segments(path);
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(lit) => {
                    if lit != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name, actual);
                }
            }
        }
        Some(params)
    }
}

/// Split a path into `/`-delimited segments. The root path `/` has no
/// segments; a trailing slash produces a final empty segment.
fn split_segments(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    }
}

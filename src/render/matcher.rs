//! Route path matching.
//!
//! # Responsibilities
//! - Match literal path segments (case-sensitive)
//! - Capture `:param` segments
//! - Exact or prefix matching at segment boundaries
//!
//! # Design Decisions
//! - Paths are compared segment by segment; empty segments (double or
//!   trailing slashes) are ignored
//! - No regex to guarantee O(n) matching
//! - `/` as a prefix pattern matches every path

use std::collections::BTreeMap;

/// Parameters captured by a match, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Extend with `other`, its values winning on conflict.
    pub fn merged(&self, other: Params) -> Params {
        let mut values = self.values.clone();
        values.extend(other.values);
        Params { values }
    }
}

/// Trait for matching a location path against a route condition.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Captured params when the path matches.
    fn match_path(&self, path: &str) -> Option<Params>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A path pattern such as `/posts/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
    exact: bool,
}

impl RoutePattern {
    /// Pattern that must consume the whole path.
    pub fn exact(pattern: &str) -> Self {
        Self::parse(pattern, true)
    }

    /// Pattern that matches the path and anything below it.
    pub fn prefix(pattern: &str) -> Self {
        Self::parse(pattern, false)
    }

    fn parse(pattern: &str, exact: bool) -> Self {
        let segments = split(pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self { segments, exact }
    }
}

impl PathMatcher for RoutePattern {
    fn match_path(&self, path: &str) -> Option<Params> {
        let mut params = Params::default();
        let mut parts = split(path);

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), part),
            }
        }

        if self.exact && parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

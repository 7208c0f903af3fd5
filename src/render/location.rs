//! Requested location.

use std::borrow::Cow;
use std::str::FromStr;

use axum::http::uri::PathAndQuery;

use crate::render::error::RenderError;

/// The URL a render runs against: the request's original path and query.
///
/// The path is percent-decoded segment by segment, so `/posts/%31` routes
/// like `/posts/1`. The query is kept raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    original: String,
    path: String,
    query: Option<String>,
}

impl Location {
    /// Parse an origin-form URL (`/path?query`). Fragments are dropped.
    pub fn parse(original_url: &str) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidLocation(original_url.to_string());

        if !original_url.starts_with('/') {
            return Err(invalid());
        }

        let without_fragment = original_url
            .split_once('#')
            .map_or(original_url, |(before, _)| before);
        let parsed = PathAndQuery::from_str(without_fragment).map_err(|_| invalid())?;

        Ok(Self {
            original: original_url.to_string(),
            path: decode_path(parsed.path()).ok_or_else(invalid)?,
            query: parsed.query().map(str::to_string),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Value of the first `key=value` pair in the query with this key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .as_deref()?
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Decode each segment on its own. A segment that decodes to something
/// containing `/` stays encoded so segment boundaries never move.
/// `None` when a segment is not valid UTF-8 once decoded.
fn decode_path(raw: &str) -> Option<String> {
    let mut segments = Vec::new();
    for segment in raw.split('/') {
        let decoded = urlencoding::decode(segment).ok()?;
        segments.push(match decoded {
            Cow::Owned(s) if s.contains('/') => segment.to_string(),
            decoded => decoded.into_owned(),
        });
    }
    Some(segments.join("/"))
}

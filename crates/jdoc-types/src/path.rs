//! Path expressions addressing a location inside a document.
//!
//! A document rooted at an object is addressed by dot-separated keys
//! (`"address.city"`). A document rooted at an array is addressed by a plain
//! element index (`"2"`). The two modes are distinct variants of [`PathExpr`];
//! which one a piece of text becomes depends on the shape of the document root,
//! so callers resolve text with [`PathExpr::resolve`] rather than inspecting
//! the path at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};

/// A location inside a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathExpr {
    /// Nested object keys, outermost first. Never empty.
    ByKeys(Vec<String>),
    /// An element of an array-rooted document.
    ByIndex(usize),
}

impl PathExpr {
    /// Parse a dotted key path.
    ///
    /// An empty path, or any empty segment (`"a..b"`, `".a"`, `"a."`), is
    /// rejected.
    pub fn keys(text: &str) -> PathResult<Self> {
        if text.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut segments = Vec::new();
        for (position, segment) in text.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment { position });
            }
            segments.push(segment.to_string());
        }
        Ok(Self::ByKeys(segments))
    }

    /// Build a key path from already-split segments.
    ///
    /// Segments are taken verbatim, so a segment may contain `.`; this is
    /// the only way to address such a key. The [`Display`](fmt::Display)
    /// form of that path joins segments with `.` and does not parse back to
    /// the same path.
    pub fn from_segments<I, S>(segments: I) -> PathResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::EmptySegment { position });
        }
        Ok(Self::ByKeys(segments))
    }

    /// Index into an array-rooted document.
    pub fn index(index: usize) -> Self {
        Self::ByIndex(index)
    }

    /// Resolve path text against the shape of a document root.
    ///
    /// When the root is an array and the text is a decimal index the result
    /// is [`PathExpr::ByIndex`]; everything else is parsed as a key path.
    pub fn resolve(text: &str, root_is_sequence: bool) -> PathResult<Self> {
        if root_is_sequence && !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = text.parse::<usize>() {
                return Ok(Self::ByIndex(index));
            }
        }
        Self::keys(text)
    }

    /// Key segments, or `None` for an index path.
    pub fn segments(&self) -> Option<&[String]> {
        match self {
            Self::ByKeys(segments) => Some(segments),
            Self::ByIndex(_) => None,
        }
    }

    /// Number of levels this path descends.
    pub fn depth(&self) -> usize {
        match self {
            Self::ByKeys(segments) => segments.len(),
            Self::ByIndex(_) => 1,
        }
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByKeys(segments) => write!(f, "{}", segments.join(".")),
            Self::ByIndex(index) => write!(f, "[{index}]"),
        }
    }
}

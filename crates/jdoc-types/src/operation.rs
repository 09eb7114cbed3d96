use std::fmt;

use serde::{Deserialize, Serialize};

/// A mutating store operation that produces a candidate document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Whole-document replacement.
    Write,
    /// Single path assignment.
    Update,
    /// Single path removal.
    Delete,
}

impl Operation {
    /// Describes the candidate document this operation produces, for
    /// validation failure messages.
    pub fn describe_candidate(&self) -> &'static str {
        match self {
            Self::Write => "data does not match the specified model",
            Self::Update => "updated data does not match the specified model",
            Self::Delete => "resulting data after deletion does not match the specified model",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

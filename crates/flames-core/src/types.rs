use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown relationship label: {0:?}")]
pub struct ParseRelationshipError(pub String);

/// One of the six FLAMES outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Friends,
    Love,
    Affection,
    Marriage,
    Enemy,
    Siblings,
}

impl Relationship {
    /// Starting order of the elimination circle: F, L, A, M, E, S.
    pub const ALL: [Relationship; 6] = [
        Relationship::Friends,
        Relationship::Love,
        Relationship::Affection,
        Relationship::Marriage,
        Relationship::Enemy,
        Relationship::Siblings,
    ];

    /// Display label, e.g. `"Marriage"`.
    pub fn label(self) -> &'static str {
        match self {
            Relationship::Friends => "Friends",
            Relationship::Love => "Love",
            Relationship::Affection => "Affection",
            Relationship::Marriage => "Marriage",
            Relationship::Enemy => "Enemy",
            Relationship::Siblings => "Siblings",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Relationship {
    type Err = ParseRelationshipError;

    /// Case-insensitive match on the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Relationship::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseRelationshipError(s.to_string()))
    }
}

/// A single pass of the elimination loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Circle length before this step.
    pub length: usize,
    /// Zero-based position removed, or `None` when the count landed
    /// exactly on the end of the circle and the last entry was dropped.
    pub index: Option<usize>,
    pub removed: Relationship,
}

/// Full outcome of a FLAMES reading, including how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Letters of the first name left after cancellation.
    pub leftover_first: String,
    /// Letters of the second name left after cancellation.
    pub leftover_second: String,
    pub remaining: usize,
    pub steps: Vec<Step>,
    pub relationship: Relationship,
}

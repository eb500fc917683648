use serde::Serialize;
use std::cmp::Ordering;

/// Number of suggestions returned by a search when no limit is given.
pub const DEFAULT_LIMIT: usize = 20;

/// A dictionary word paired with its edit distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Self {
            word: word.into(),
            distance,
        }
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Closest first; equal distances fall back to byte-wise word order.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Sort candidates into display order, then keep the first `limit`.
pub fn rank(mut candidates: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    candidates.sort();
    candidates.truncate(limit);
    candidates
}

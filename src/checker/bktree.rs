//! Burkhard-Keller tree over a word metric.
//!
//! Every child edge is labelled with the exact distance between the parent's
//! word and every word stored below that edge. A query at distance `d` from a
//! node can therefore skip every edge outside `d - tolerance ..= d + tolerance`.

use super::distance::{Levenshtein, Metric};
use super::suggestions::{rank, Suggestion, DEFAULT_LIMIT};
use log::debug;
use std::collections::BTreeMap;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    word: String,
    children: BTreeMap<usize, NodeId>,
}

impl Node {
    fn leaf(word: &str) -> Self {
        Self {
            word: word.to_string(),
            children: BTreeMap::new(),
        }
    }
}

/// Arena-backed BK-tree. The root, when present, is always slot 0.
#[derive(Debug, Clone)]
pub struct BkTree<M = Levenshtein> {
    nodes: Vec<Node>,
    metric: M,
}

impl BkTree<Levenshtein> {
    pub fn new() -> Self {
        Self::with_metric(Levenshtein)
    }
}

impl Default for BkTree<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> BkTree<M> {
    pub fn with_metric(metric: M) -> Self {
        Self {
            nodes: Vec::new(),
            metric,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a word. Returns `false` when the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(Node::leaf(word));
            return true;
        }

        let mut current = 0;
        loop {
            let distance = self.metric.distance(&self.nodes[current].word, word);
            if distance == 0 {
                return false;
            }

            match self.nodes[current].children.get(&distance) {
                Some(&child) => current = child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::leaf(word));
                    self.nodes[current].children.insert(distance, id);
                    return true;
                }
            }
        }
    }

    /// Exact lookup by following the single edge matching each distance.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };

        while let Some(id) = current {
            let node = &self.nodes[id];
            let distance = self.metric.distance(&node.word, word);
            if distance == 0 {
                return true;
            }
            current = node.children.get(&distance).copied();
        }

        false
    }

    /// Ranked suggestions within `tolerance`, capped at [`DEFAULT_LIMIT`].
    pub fn search(&self, word: &str, tolerance: i32) -> Vec<Suggestion> {
        self.search_with_limit(word, tolerance, DEFAULT_LIMIT)
    }

    pub fn search_with_limit(&self, word: &str, tolerance: i32, limit: usize) -> Vec<Suggestion> {
        rank(self.collect(word, tolerance), limit)
    }

    /// Every indexed word within `tolerance`, ranked and uncapped.
    pub fn find_all(&self, word: &str, tolerance: i32) -> Vec<Suggestion> {
        rank(self.collect(word, tolerance), usize::MAX)
    }

    fn collect(&self, word: &str, tolerance: i32) -> Vec<Suggestion> {
        let Ok(tolerance) = usize::try_from(tolerance) else {
            debug!("negative tolerance {} for {:?}, returning nothing", tolerance, word);
            return Vec::new();
        };

        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return found;
        }

        let mut pending = vec![0];
        while let Some(id) = pending.pop() {
            let node = &self.nodes[id];
            let distance = self.metric.distance(&node.word, word);

            if distance <= tolerance {
                found.push(Suggestion::new(node.word.clone(), distance));
            }

            let low = distance.saturating_sub(tolerance);
            let high = distance.saturating_add(tolerance);
            pending.extend(node.children.range(low..=high).map(|(_, &child)| child));
        }

        found
    }
}

impl<'a, M: Metric> Extend<&'a str> for BkTree<M> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for BkTree<Levenshtein> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut tree = Self::new();
        tree.extend(words);
        tree
    }
}

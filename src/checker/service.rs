//! Dictionary-backed spell checking over a live document.
//!
//! A [`SpellCheckService`] starts out `Loading`, becomes `Ready` after exactly
//! one successful dictionary load, or `Failed` if the word source could not be
//! read. Neither end state can be left again. Queries never mutate the index,
//! so a ready service can be shared across threads.

use super::bktree::BkTree;
use super::dictionary::{normalize, Dictionary};
use super::suggestions::{Suggestion, DEFAULT_LIMIT};
use super::tokenizer::{self, is_checkable};
use crate::dict::source::WordSource;
use crate::CheckError;
use log::{debug, error, info};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Tolerance used to list near neighbours of correctly spelled words.
    pub neighbor_radius: i32,
    pub max_suggestions: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            neighbor_radius: 1,
            max_suggestions: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceState {
    Loading,
    Ready,
    Failed(String),
}

/// What the token under the cursor looks like to the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorContext {
    pub current_token: String,
    pub is_known: bool,
    pub suggestions: Vec<Suggestion>,
}

impl CursorContext {
    fn unflagged(current_token: String) -> Self {
        Self {
            current_token,
            is_known: true,
            suggestions: Vec::new(),
        }
    }
}

/// A distinct unknown token and the byte offset where it first appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisspelledEntry {
    pub word: String,
    pub offset: usize,
}

struct Index {
    dictionary: Dictionary,
    tree: BkTree,
}

enum State {
    Loading,
    Ready(Index),
    Failed(String),
}

pub struct SpellCheckService {
    state: State,
    options: ServiceOptions,
}

impl SpellCheckService {
    pub fn new(options: ServiceOptions) -> Self {
        Self {
            state: State::Loading,
            options,
        }
    }

    pub fn state(&self) -> ServiceState {
        match &self.state {
            State::Loading => ServiceState::Loading,
            State::Ready(_) => ServiceState::Ready,
            State::Failed(reason) => ServiceState::Failed(reason.clone()),
        }
    }

    /// Number of distinct dictionary words, zero unless ready.
    pub fn word_count(&self) -> usize {
        match &self.state {
            State::Ready(index) => index.dictionary.len(),
            _ => 0,
        }
    }

    /// Build the membership set and the BK-tree from one normalized list.
    /// Words are inserted into the tree in the order given.
    pub fn load_dictionary<I, S>(&mut self, words: I) -> Result<usize, CheckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_loading()?;

        let words = normalize(words);
        let dictionary = match Dictionary::from_words(&words) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                error!("Failed to build dictionary: {}", e);
                self.state = State::Failed(e.to_string());
                return Err(CheckError::Build(e));
            }
        };

        let mut tree = BkTree::new();
        tree.extend(words.iter().map(String::as_str));
        debug_assert_eq!(tree.len(), dictionary.len());

        let count = dictionary.len();
        info!("Loaded {} words into BK-tree", count);
        self.state = State::Ready(Index { dictionary, tree });
        Ok(count)
    }

    /// Read `source` and load it, or move to `Failed` if reading fails.
    pub fn load_from(&mut self, source: &dyn WordSource) -> Result<usize, CheckError> {
        self.ensure_loading()?;

        match source.words() {
            Ok(words) => {
                debug!("Read {} entries from {}", words.len(), source.describe());
                self.load_dictionary(words)
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                error!("Failed to load dictionary from {}: {}", source.describe(), reason);
                self.mark_failed(reason.clone());
                Err(CheckError::DictionaryUnavailable { reason })
            }
        }
    }

    /// Record an upstream load failure. Has no effect once ready.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        if let State::Loading = self.state {
            self.state = State::Failed(reason.into());
        }
    }

    /// Inspect the token ending at `cursor` (a char offset into `text`).
    ///
    /// Unknown tokens get corrections within `tolerance`; known tokens get
    /// their near neighbours (excluding themselves) within the configured
    /// neighbour radius. Tokens of two letters or fewer are never flagged.
    pub fn analyze_cursor_context(
        &self,
        text: &str,
        cursor: usize,
        tolerance: i32,
    ) -> Result<CursorContext, CheckError> {
        let Some(index) = self.index()? else {
            return Ok(CursorContext::unflagged(String::new()));
        };

        let token = match tokenizer::token_before(text, cursor) {
            Some(token) => token.text,
            None => return Ok(CursorContext::unflagged(String::new())),
        };

        if !is_checkable(&token) {
            return Ok(CursorContext::unflagged(token));
        }

        let limit = self.options.max_suggestions;
        if index.dictionary.contains(&token) {
            let mut suggestions: Vec<_> = index
                .tree
                .search_with_limit(&token, self.options.neighbor_radius, limit.saturating_add(1))
                .into_iter()
                .filter(|s| s.word != token)
                .collect();
            suggestions.truncate(limit);

            Ok(CursorContext {
                current_token: token,
                is_known: true,
                suggestions,
            })
        } else {
            let suggestions = index.tree.search_with_limit(&token, tolerance, limit);
            debug!("{} suggestions for {:?} at tolerance {}", suggestions.len(), token, tolerance);

            Ok(CursorContext {
                current_token: token,
                is_known: false,
                suggestions,
            })
        }
    }

    /// Distinct checkable tokens of `text` missing from the dictionary,
    /// in order of first appearance.
    pub fn find_unknown_tokens(&self, text: &str) -> Result<Vec<MisspelledEntry>, CheckError> {
        let Some(index) = self.index()? else {
            return Ok(Vec::new());
        };

        let mut seen = HashSet::new();
        let mut unknown = Vec::new();

        for token in tokenizer::tokens(text) {
            if !seen.insert(token.text.clone()) {
                continue;
            }
            if is_checkable(&token.text) && !index.dictionary.contains(&token.text) {
                unknown.push(MisspelledEntry {
                    word: token.text,
                    offset: token.span.start,
                });
            }
        }

        Ok(unknown)
    }

    /// Ranked corrections for a single word, whether or not it is known.
    pub fn suggest(&self, word: &str, tolerance: i32) -> Result<Vec<Suggestion>, CheckError> {
        let Some(index) = self.index()? else {
            return Ok(Vec::new());
        };

        let word = word.trim().to_lowercase();
        Ok(index
            .tree
            .search_with_limit(&word, tolerance, self.options.max_suggestions))
    }

    fn ensure_loading(&self) -> Result<(), CheckError> {
        match self.state {
            State::Loading => Ok(()),
            _ => Err(CheckError::AlreadyLoaded),
        }
    }

    fn index(&self) -> Result<Option<&Index>, CheckError> {
        match &self.state {
            State::Loading => Ok(None),
            State::Ready(index) => Ok(Some(index)),
            State::Failed(reason) => Err(CheckError::DictionaryUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

impl Default for SpellCheckService {
    fn default() -> Self {
        Self::new(ServiceOptions::default())
    }
}

pub mod bktree;
pub mod dictionary;
pub mod distance;
pub mod service;
pub mod suggestions;
pub mod tokenizer;

use crate::dict::source::WordSource;
use crate::{CheckError, CheckResult, Config, Misspelling, TextSpan};
use anyhow::{Context, Result};
use log::warn;
use regex::Regex;
use service::{CursorContext, ServiceOptions, SpellCheckService};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// File-level checking on top of [`SpellCheckService`]: ignore patterns,
/// line/column positions and the configured tolerance.
pub struct SpellChecker {
    service: SpellCheckService,
    ignore_patterns: Vec<Regex>,
    tolerance: i32,
}

impl SpellChecker {
    /// Load the dictionary named by `config`. A dictionary that can't be read
    /// leaves the checker in a failed state instead of returning an error.
    pub fn new(config: &Config) -> Self {
        let source = crate::dict::source_for(config);
        Self::with_source(config, source.as_ref())
    }

    pub fn with_source(config: &Config, source: &dyn WordSource) -> Self {
        let mut service = SpellCheckService::new(ServiceOptions {
            neighbor_radius: config.neighbor_radius,
            max_suggestions: config.max_suggestions,
        });
        // Failure is recorded in the service state and surfaced on first query.
        let _ = service.load_from(source);

        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!("Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Self {
            service,
            ignore_patterns,
            tolerance: config.tolerance,
        }
    }

    pub fn check(&self, file_path: &Path) -> Result<CheckResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        Ok(self.check_text(&content)?)
    }

    /// Report every occurrence of every unknown word outside ignored regions.
    pub fn check_text(&self, text: &str) -> Result<CheckResult, CheckError> {
        let unknown: HashSet<String> = self
            .service
            .find_unknown_tokens(text)?
            .into_iter()
            .map(|entry| entry.word)
            .collect();

        if unknown.is_empty() {
            return Ok(CheckResult::default());
        }

        let ignored = self.ignored_spans(text);
        let mut suggestions: HashMap<String, Vec<String>> = HashMap::new();
        let mut errors = Vec::new();

        for token in tokenizer::tokens(text) {
            if !unknown.contains(&token.text) || ignored.iter().any(|s| s.contains(&token.span)) {
                continue;
            }

            let words = match suggestions.get(&token.text) {
                Some(words) => words.clone(),
                None => {
                    let words: Vec<String> = self
                        .service
                        .suggest(&token.text, self.tolerance)?
                        .into_iter()
                        .map(|s| s.word)
                        .collect();
                    suggestions.insert(token.text.clone(), words.clone());
                    words
                }
            };

            let (line, column) = tokenizer::line_col(text, token.span.start);
            errors.push(Misspelling {
                word: text[token.span.start..token.span.end].to_string(),
                line,
                column,
                context: tokenizer::context(text, &token.span),
                suggestions: words,
            });
        }

        Ok(CheckResult {
            error_count: errors.len(),
            errors,
        })
    }

    /// Analyze the token ending at a char `cursor` within `text`.
    pub fn cursor(&self, text: &str, cursor: usize) -> Result<CursorContext, CheckError> {
        self.service
            .analyze_cursor_context(text, cursor, self.tolerance)
    }

    fn ignored_spans(&self, text: &str) -> Vec<TextSpan> {
        self.ignore_patterns
            .iter()
            .flat_map(|re| re.find_iter(text))
            .map(|m| TextSpan {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::source::{WordFile, WordList};

    fn checker(words: &[&str]) -> SpellChecker {
        let list = WordList(words.iter().map(|w| w.to_string()).collect());
        SpellChecker::with_source(&Config::default(), &list)
    }

    #[test]
    fn test_reports_every_occurrence_with_position() {
        let checker = checker(&["the", "quick", "brown", "fox"]);
        let result = checker.check_text("the quikc fox\nTeh quikc brown").unwrap();

        assert_eq!(result.error_count, 3);
        let found: Vec<_> = result
            .errors
            .iter()
            .map(|e| (e.word.as_str(), e.line, e.column))
            .collect();
        assert_eq!(found, vec![("quikc", 1, 5), ("Teh", 2, 1), ("quikc", 2, 5)]);
        assert_eq!(result.errors[0].suggestions, vec!["quick"]);
        assert_eq!(result.errors[1].suggestions, vec!["the"]);
    }

    #[test]
    fn test_ignore_patterns_mask_regions() {
        let checker = checker(&["see", "for", "details"]);
        let result = checker
            .check_text("see https://exmaple.com/pathz for details, NOTAWORD")
            .unwrap();
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_clean_text() {
        let checker = checker(&["the", "fox"]);
        let result = checker.check_text("The fox, the FOX.").unwrap();
        assert_eq!(result.error_count, 0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unavailable_dictionary_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordFile::new(dir.path().join("missing.txt"));
        let checker = SpellChecker::with_source(&Config::default(), &source);

        assert!(matches!(
            checker.check_text("anything"),
            Err(CheckError::DictionaryUnavailable { .. })
        ));
        assert!(checker.cursor("anything", 8).is_err());
    }

    #[test]
    fn test_cursor_uses_configured_tolerance() {
        let list = WordList(vec!["brown".to_string()]);
        let config = Config {
            tolerance: 1,
            ..Default::default()
        };
        let checker = SpellChecker::with_source(&config, &list);
        assert!(checker.cursor("bronw", 5).unwrap().suggestions.is_empty());

        let checker = SpellChecker::with_source(&Config::default(), &list);
        assert_eq!(checker.cursor("bronw", 5).unwrap().suggestions.len(), 1);
    }
}

pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use checker::service::SpellCheckService;
pub use checker::SpellChecker;
pub use config::Config;
pub use error::CheckError;

use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub error_count: usize,
    pub errors: Vec<Misspelling>,
}

/// One occurrence of an unknown word in a checked document.
#[derive(Debug, Clone, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
}

/// Byte range into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn contains(&self, other: &TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

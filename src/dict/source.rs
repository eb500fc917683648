use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Somewhere a raw word list can be read from, one entry per line.
pub trait WordSource: Send + Sync {
    fn describe(&self) -> String;
    fn words(&self) -> Result<Vec<String>>;
}

/// Words already in memory.
pub struct WordList(pub Vec<String>);

impl WordSource for WordList {
    fn describe(&self) -> String {
        format!("{} in-memory words", self.0.len())
    }

    fn words(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// A plain-text word list on disk.
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for WordFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn words(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read word list: {}", self.path.display()))?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// A word list fetched over HTTP.
pub struct RemoteWordList {
    url: String,
}

impl RemoteWordList {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl WordSource for RemoteWordList {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn words(&self) -> Result<Vec<String>> {
        let response = reqwest::blocking::get(&self.url)
            .with_context(|| format!("Failed to download word list: {}", self.url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to download word list: HTTP {}", response.status());
        }

        let content = response.text().context("Failed to read response body")?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_word_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "the\nQuick\n\nbrown\n").unwrap();

        let words = WordFile::new(&path).words().unwrap();
        assert_eq!(words, vec!["the", "Quick", "", "brown"]);
    }

    #[test]
    fn test_missing_word_file() {
        let dir = tempdir().unwrap();
        let err = WordFile::new(dir.path().join("nope.txt")).words().unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
    }
}

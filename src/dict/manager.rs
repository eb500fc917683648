use super::source::{RemoteWordList, WordFile, WordSource};
use crate::checker::dictionary::{normalize, Dictionary};
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

// Use a specific commit hash for reproducibility and stability
// This prevents unexpected changes from the 'master' branch
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";
const WORDLIST_VERSION: &str = "2023.12";
const EXTENSION: &str = "txt";

/// Where the word list for `language` lives in the data directory.
pub fn installed_path(language: &str) -> Option<PathBuf> {
    crate::config::Config::data_dir().map(|dir| path_in(&dir, language))
}

fn path_in(data_dir: &Path, language: &str) -> PathBuf {
    data_dir.join(format!("{}.{}", language, EXTENSION))
}

fn wordlist_url(language: &str) -> Result<String> {
    match language {
        "en_US" | "en_GB" => Ok(format!("{}/words_alpha.txt", WORDLIST_BASE_URL)),
        other => anyhow::bail!(
            "Language '{}' is not supported. Only 'en_US' and 'en_GB' are currently available.",
            other
        ),
    }
}

/// The downloaded word list for a language.
pub struct InstalledDictionary {
    language: String,
}

impl InstalledDictionary {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }
}

impl WordSource for InstalledDictionary {
    fn describe(&self) -> String {
        format!("installed dictionary {}", self.language)
    }

    fn words(&self) -> Result<Vec<String>> {
        let path = installed_path(&self.language).context("Failed to get data directory")?;
        if !path.exists() {
            anyhow::bail!(
                "no dictionary installed for {}; run `bkspell dict download {}`",
                self.language,
                self.language
            );
        }
        WordFile::new(path).words()
    }
}

/// Normalize, deduplicate and write a word list to `path`, one word per line.
/// Returns the number of words written.
pub fn write_wordlist(words: Vec<String>, path: &Path) -> Result<usize> {
    let mut words = normalize(words);
    words.sort();
    words.dedup();

    let mut content = words.join("\n");
    content.push('\n');
    fs::write(path, content)
        .with_context(|| format!("Failed to write dictionary: {}", path.display()))?;

    Ok(words.len())
}

fn installed_languages(data_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut languages = Vec::new();

    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();

        if path.extension().and_then(|s| s.to_str()) == Some(EXTENSION) {
            if let Some(language) = path.file_stem().and_then(|s| s.to_str()) {
                languages.push((language.to_string(), path.clone()));
            }
        }
    }

    languages.sort();
    Ok(languages)
}

pub fn list_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to download a dictionary.",
            "bkspell dict download en_US".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    let languages = installed_languages(&data_dir)?;
    for (language, path) in &languages {
        let size_kb = fs::metadata(path)?.len() / 1024;
        println!(
            "  {} {} ({})",
            "✓".green(),
            language.cyan().bold(),
            format!("{}KB", size_kb).dimmed()
        );
    }

    if languages.is_empty() {
        println!("{}", "No dictionaries found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn download_dictionary(language: &str) -> Result<()> {
    println!(
        "{} dictionary for {} (version: {})...",
        "Downloading".cyan().bold(),
        language.yellow(),
        WORDLIST_VERSION.dimmed()
    );

    let url = wordlist_url(language)?;
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;
    fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

    println!("Source: {}", url.dimmed());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("Invalid progress template")?,
    );
    pb.set_message("Downloading...");

    let words = RemoteWordList::new(&url).words()?;
    pb.finish_with_message("Download complete");

    let dict_path = path_in(&data_dir, language);
    let count = write_wordlist(words, &dict_path)?;
    info!("Wrote {} words to {}", count, dict_path.display());

    println!("Found {} words", count.to_string().yellow());
    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

pub fn update_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        return Ok(());
    }

    let languages = installed_languages(&data_dir)?;
    if languages.is_empty() {
        println!("{}", "No dictionaries to update.".yellow());
        return Ok(());
    }

    println!(
        "{} {} {}...",
        "Updating".cyan().bold(),
        languages.len(),
        if languages.len() == 1 {
            "dictionary"
        } else {
            "dictionaries"
        }
    );
    println!();

    for (language, _) in languages {
        download_dictionary(&language)?;
        println!();
    }

    println!("{} All dictionaries updated!", "✓".green().bold());

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let Some(dict_path) = installed_path(language).filter(|p| p.exists()) else {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Run {} to download it.",
            format!("bkspell dict download {}", language).cyan()
        );
        return Ok(());
    };

    let metadata = fs::metadata(&dict_path)?;

    println!("{}", format!("Dictionary: {}", language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Version: {}", WORDLIST_VERSION);
    println!("  Format: plain text, one word per line");

    match count_words(&dict_path) {
        Ok(count) => println!("  Words: {}", count.to_string().yellow()),
        Err(e) => println!("  {}: {:#}", "Error loading dictionary".red(), e),
    }

    Ok(())
}

/// Distinct normalized words in a word-list file.
pub fn count_words(path: &Path) -> Result<usize> {
    let words = normalize(WordFile::new(path).words()?);
    Ok(Dictionary::from_words(&words)?.len())
}

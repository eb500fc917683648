use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit word list, one word per line. Overrides the installed dictionary.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum edit distance for corrections of unknown words.
    #[serde(default = "default_tolerance")]
    pub tolerance: i32,

    /// Maximum edit distance for neighbours of correctly spelled words.
    #[serde(default = "default_neighbor_radius")]
    pub neighbor_radius: i32,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_tolerance() -> i32 {
    2
}

fn default_neighbor_radius() -> i32 {
    1
}

fn default_max_suggestions() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            tolerance: default_tolerance(),
            neighbor_radius: default_neighbor_radius(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Command-line values that take precedence over every config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub dictionary: Option<PathBuf>,
    pub tolerance: Option<i32>,
    pub ignore_patterns: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".bkspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        Ok(config.apply(overrides))
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(dictionary) = overrides.dictionary {
            self.dictionary = Some(dictionary);
        }
        if let Some(tolerance) = overrides.tolerance {
            self.tolerance = tolerance;
        }
        self.ignore_patterns.extend(overrides.ignore_patterns);
        self
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.tolerance != default_tolerance() {
            self.tolerance = other.tolerance;
        }
        if other.neighbor_radius != default_neighbor_radius() {
            self.neighbor_radius = other.neighbor_radius;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bkspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bkspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

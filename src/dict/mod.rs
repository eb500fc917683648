pub mod manager;
pub mod source;

use crate::Config;
use manager::InstalledDictionary;
use source::{WordFile, WordSource};

/// The word source `config` asks for: an explicit file, else the installed
/// dictionary for the configured language.
pub fn source_for(config: &Config) -> Box<dyn WordSource> {
    match &config.dictionary {
        Some(path) => Box::new(WordFile::new(path)),
        None => Box::new(InstalledDictionary::new(&config.language)),
    }
}

use std::path::Path;

use crate::wordlist::WordList;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Model error: {0}")]
    Model(String),
}

pub struct WordListLoader;

impl WordListLoader {
    /// Load the word list compiled into the crate
    pub fn load_embedded() -> Result<WordList, LoadError> {
        let json = include_str!("../data/wordlist.json");
        tracing::info!("Loading embedded English stop list...");
        let list = WordList::from_json(json)?;
        tracing::info!("Loaded {} word list entries", list.entry_count());
        Ok(list)
    }

    /// Load a word list from file path
    pub fn load_from_file(path: &Path) -> Result<WordList, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading word list from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let list = WordList::from_json(&json)?;
        tracing::info!("Loaded {} word list entries from file", list.entry_count());
        Ok(list)
    }

    /// Merge two word lists (exceptions in `additional` override `base`)
    pub fn merge(base: WordList, additional: WordList) -> WordList {
        base.merge(additional)
    }
}

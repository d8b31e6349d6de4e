use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".wordmark".to_string()
}

fn default_store_file() -> String {
    "vocabulary.json".to_string()
}

fn default_high_frequency_words() -> String {
    "highFrequencyWords.txt".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VocabularyConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Known/unknown status file, relative to `data_dir`
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// Word list for `init`, most frequent first, relative to `data_dir`
    #[serde(default = "default_high_frequency_words")]
    pub high_frequency_words: String,
}

impl VocabularyConfig {
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.store_file)
    }

    pub fn high_frequency_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.high_frequency_words)
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_file: default_store_file(),
            high_frequency_words: default_high_frequency_words(),
        }
    }
}

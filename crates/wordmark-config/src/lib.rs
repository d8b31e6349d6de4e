use std::env;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::notes::NotesConfig;
use self::vocabulary::VocabularyConfig;

pub mod dictionary;
pub mod notes;
pub mod vocabulary;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub notes: NotesConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Defaults plus `WORDMARK_*` environment overrides
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file, missing sections fall back to defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup("WORDMARK_DATA_DIR") {
            self.vocabulary.data_dir = data_dir;
        }
        if let Some(folder) = lookup("WORDMARK_NOTES_DIR") {
            self.notes.folder = folder;
        }
        if let Some(language) = lookup("WORDMARK_LANG") {
            self.dictionary.language = language;
        }
        if let Some(api_url) = lookup("WORDMARK_API_URL") {
            self.dictionary.api_url = api_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.vocabulary.store_path(), Path::new(".wordmark/vocabulary.json"));
        assert_eq!(config.notes.folder, "Vocabulary");
        assert!(config.notes.general_template.contains("# {{word}}"));
        assert_eq!(config.dictionary.provider, "free-dictionary");
        assert_eq!(config.dictionary.language, "en");
        assert!(config.dictionary.enabled);
    }

    #[test]
    fn env_overrides_replace_defaults() {
        let env: HashMap<&str, &str> =
            HashMap::from([("WORDMARK_DATA_DIR", "/tmp/wm"), ("WORDMARK_LANG", "en-gb")]);
        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.vocabulary.data_dir, "/tmp/wm");
        assert_eq!(config.dictionary.language, "en-gb");
        assert_eq!(config.notes.folder, "Vocabulary");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordmark.json");
        std::fs::write(&path, r#"{"notes": {"folder": "Words"}, "dictionary": {"enabled": false}}"#)
            .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.notes.folder, "Words");
        assert_eq!(config.notes.definition_template, "> {{definition}}\n\n");
        assert!(!config.dictionary.enabled);
        assert_eq!(config.vocabulary.store_file, "vocabulary.json");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_file(&dir.path().join("absent.json")).is_err());
    }
}

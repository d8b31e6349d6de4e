use std::collections::HashMap;
use std::path::Path;

use crate::{DefinitionError, DefinitionSource, DictionaryWord};

/// Definitions read from a JSON file mapping words to entries
#[derive(Debug, Default, Clone)]
pub struct LocalDictionary {
    entries: HashMap<String, DictionaryWord>,
}

impl LocalDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let entries: HashMap<String, DictionaryWord> = serde_json::from_str(json)?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(word, entry)| (word.to_lowercase(), entry))
                .collect(),
        })
    }

    /// A missing file is an empty dictionary
    pub fn load_from_file(path: &Path) -> Result<Self, DefinitionError> {
        if !path.exists() {
            tracing::warn!("Local dictionary {} not found, starting empty", path.display());
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json)?;
        tracing::info!("Loaded {} local dictionary entries", dict.entries.len());
        Ok(dict)
    }

    pub fn insert(&mut self, entry: DictionaryWord) {
        self.entries.insert(entry.word.to_lowercase(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait::async_trait]
impl DefinitionSource for LocalDictionary {
    fn name(&self) -> &str {
        "Local dictionary"
    }

    fn homepage_url(&self) -> &str {
        ""
    }

    fn is_offline(&self) -> bool {
        true
    }

    async fn fetch_definition(
        &self,
        word: &str,
        _lang: &str,
    ) -> Result<DictionaryWord, DefinitionError> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| DefinitionError::NotFound {
                word: word.to_string(),
            })
    }
}

use std::path::Path;
use std::sync::Arc;

use wordmark_config::Config;
use wordmark_definitions::{DefinitionError, DefinitionSource, DictionaryWord};
use wordmark_lang_english::EnglishProcessor;

use crate::state::AppState;
use crate::store::JsonVocabularyStore;

mod command_tests;

/// Answers every lookup except the listed words
pub struct StubDefinitions {
    missing: Vec<&'static str>,
}

#[async_trait::async_trait]
impl DefinitionSource for StubDefinitions {
    fn name(&self) -> &str {
        "stub"
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
        if self.missing.iter().any(|missing| *missing == word) {
            return Err(DefinitionError::NotFound {
                word: word.to_string(),
            });
        }
        Ok(DictionaryWord {
            word: word.to_string(),
            origin: None,
            phonetics: vec![],
            meanings: vec![],
        })
    }
}

/// App state rooted in `dir`, with notes under `dir/Vocabulary`
pub fn test_state(dir: &Path, missing: &[&'static str]) -> AppState {
    let mut config = Config::default();
    config.notes.folder = dir.join("Vocabulary").display().to_string();
    config.vocabulary.data_dir = dir.join("data").display().to_string();

    let store = JsonVocabularyStore::load(config.vocabulary.store_path()).unwrap();
    let definitions = StubDefinitions {
        missing: missing.to_vec(),
    };
    AppState::with_parts(config, EnglishProcessor::new().unwrap(), store, Some(Arc::new(definitions)))
}

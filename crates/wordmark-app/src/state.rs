use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use wordmark_config::Config;
use wordmark_core::{Article, VocabularyStatus, VocabularyStore};
use wordmark_definitions::{DefinitionSource, LocalDictionary};
use wordmark_lang_english::{EnglishProcessor, FreeDictionaryApi};
use wordmark_notes::{NoteTemplate, NoteVault};

use crate::store::JsonVocabularyStore;

pub struct AppState {
    pub config: Config,
    pub processor: Arc<EnglishProcessor>,
    pub store: RwLock<JsonVocabularyStore>,
    pub vault: NoteVault,
    /// `None` when dictionary lookups are disabled
    pub definitions: Option<Arc<dyn DefinitionSource>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let processor = EnglishProcessor::with_additional_lists(&config.dictionary.additional_paths)?;
        let store = JsonVocabularyStore::load(config.vocabulary.store_path())?;
        let definitions = definition_source(&config)?;

        Ok(Self::with_parts(config, processor, store, definitions))
    }

    pub fn with_parts(
        config: Config,
        processor: EnglishProcessor,
        store: JsonVocabularyStore,
        definitions: Option<Arc<dyn DefinitionSource>>,
    ) -> Self {
        let vault = NoteVault::new(&config.notes.folder, NoteTemplate::from(&config.notes));
        Self {
            config,
            processor: Arc::new(processor),
            store: RwLock::new(store),
            vault,
            definitions,
        }
    }

    /// Analyze a whole document off the async runtime
    pub async fn analyze(&self, text: String) -> anyhow::Result<Article> {
        let processor = Arc::clone(&self.processor);
        let article = tokio::task::spawn_blocking(move || processor.analyze(&text)).await?;
        Ok(article)
    }

    /// Record the lemma as known and drop its note
    pub async fn mark_known(&self, lemma: &str) -> anyhow::Result<()> {
        self.store.write().await.set_status(lemma, VocabularyStatus::Known);
        self.vault.remove(lemma).await?;
        Ok(())
    }

    /// Record the lemma as unknown and write its note
    pub async fn mark_unknown(&self, lemma: &str) -> anyhow::Result<()> {
        self.store.write().await.set_status(lemma, VocabularyStatus::Unknown);
        if let Some(source) = &self.definitions {
            self.vault
                .create(lemma, source.as_ref(), &self.config.dictionary.language)
                .await?;
        }
        Ok(())
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        self.store.read().await.save()
    }
}

fn definition_source(config: &Config) -> anyhow::Result<Option<Arc<dyn DefinitionSource>>> {
    let dictionary = &config.dictionary;
    if !dictionary.enabled {
        tracing::warn!("Dictionary disabled, notes will not be created");
        return Ok(None);
    }

    let source: Arc<dyn DefinitionSource> = match dictionary.provider.as_str() {
        "free-dictionary" => Arc::new(FreeDictionaryApi::new(dictionary.api_url.clone())),
        "local" => {
            let path = PathBuf::from(&config.vocabulary.data_dir).join("dictionary.json");
            Arc::new(LocalDictionary::load_from_file(&path)?)
        }
        other => anyhow::bail!("Unknown dictionary provider: {other}"),
    };

    tracing::info!("Using definition source: {}", source.name());
    Ok(Some(source))
}

use std::path::Path;
use std::sync::Arc;

use wordmark_core::{Article, ArticleAnalyzer};

use crate::lemmatizer::EnglishLemmatizer;
use crate::lexer::EnglishLexer;
use crate::loader::{LoadError, WordListLoader};
use crate::model::EnglishModel;
use crate::tagger::EnglishTagger;
use crate::wordlist::WordList;

/// English article processor: lexer, model-backed tagger and lemmatizer
pub struct EnglishProcessor {
    lexer: EnglishLexer,
    tagger: EnglishTagger,
    lemmatizer: EnglishLemmatizer,
}

impl EnglishProcessor {
    /// Create a processor with the embedded model and stop list
    pub fn new() -> Result<Self, LoadError> {
        Self::with_additional_lists(&[])
    }

    /// Create a processor with additional word list paths.
    ///
    /// A list that fails to load is skipped, a model that fails to load is an error.
    pub fn with_additional_lists(additional_paths: &[String]) -> Result<Self, LoadError> {
        let mut words = WordListLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded stop list: {}", e);
            tracing::warn!("Starting with empty word list");
            WordList::new()
        });

        for path in additional_paths {
            match WordListLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional word list from: {}", path);
                    words = WordListLoader::merge(words, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load word list from {}: {}", path, e);
                }
            }
        }

        Ok(Self::with_parts(EnglishModel::shared()?, words))
    }

    pub fn with_parts(model: Arc<EnglishModel>, words: WordList) -> Self {
        Self {
            lexer: EnglishLexer::new(),
            tagger: EnglishTagger::new(Arc::clone(&model)),
            lemmatizer: EnglishLemmatizer::new(model, Arc::new(words)),
        }
    }

    pub fn analyzer(&self) -> ArticleAnalyzer<'_> {
        ArticleAnalyzer::new(&self.lexer, &self.tagger, &self.lemmatizer)
    }

    pub fn analyze(&self, text: &str) -> Article {
        self.analyzer().analyze(text)
    }
}

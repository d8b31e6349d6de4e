use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use nlprule::Tokenizer;

use crate::loader::LoadError;

static SHARED: OnceLock<Arc<EnglishModel>> = OnceLock::new();

/// One dictionary reading of a word: its lemma and Penn Treebank tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lemma: String,
    pub tag: String,
}

impl Reading {
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }

    /// Tag used by the tokenizer for markers and unknown words rather than a word class
    pub fn is_marker(&self) -> bool {
        self.tag.is_empty() || self.tag.starts_with("SENT_") || self.tag == "PCT"
    }
}

/// A token as the model saw it in context
#[derive(Debug, Clone)]
pub struct ModelToken {
    pub text: String,
    pub readings: Vec<Reading>,
    pub chunks: Vec<String>,
}

/// The English tokenizer: tagging dictionary, disambiguation rules and chunker
pub struct EnglishModel {
    tokenizer: Tokenizer,
    readings: RwLock<HashMap<String, Vec<Reading>>>,
}

impl EnglishModel {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            readings: RwLock::new(HashMap::new()),
        }
    }

    /// Load the tokenizer binary compiled into the crate
    pub fn load_embedded() -> Result<Self, LoadError> {
        let mut bytes: &'static [u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en_tokenizer.bin"));
        tracing::info!("Loading embedded English tokenizer ({} bytes)...", bytes.len());
        let tokenizer = Tokenizer::from_reader(&mut bytes).map_err(|e| LoadError::Model(e.to_string()))?;
        tracing::info!("English tokenizer ready");
        Ok(Self::new(tokenizer))
    }

    /// The embedded model, loaded once per process
    pub fn shared() -> Result<Arc<Self>, LoadError> {
        if let Some(model) = SHARED.get() {
            return Ok(Arc::clone(model));
        }
        let model = Arc::new(Self::load_embedded()?);
        Ok(Arc::clone(SHARED.get_or_init(|| model)))
    }

    /// Tokenize and tag running text, disambiguated by context
    pub fn analyze(&self, text: &str) -> Vec<ModelToken> {
        self.tokenizer
            .pipe(text)
            .flat_map(|sentence| {
                sentence
                    .tokens()
                    .iter()
                    .map(|token| ModelToken {
                        text: token.word().text().as_str().to_string(),
                        readings: token
                            .word()
                            .tags()
                            .iter()
                            .map(|data| Reading::new(data.lemma().as_str(), data.pos().as_str()))
                            .collect(),
                        chunks: token.chunks().to_vec(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Every dictionary reading of a single lowercase word, cached
    pub fn readings(&self, word: &str) -> Vec<Reading> {
        if let Ok(cache) = self.readings.read() {
            if let Some(found) = cache.get(word) {
                return found.clone();
            }
        }

        let found: Vec<Reading> = self
            .analyze(word)
            .into_iter()
            .filter(|token| token.text.eq_ignore_ascii_case(word))
            .flat_map(|token| token.readings)
            .filter(|reading| !reading.is_marker())
            .collect();

        if let Ok(mut cache) = self.readings.write() {
            cache.insert(word.to_string(), found.clone());
        }
        found
    }
}

impl std::fmt::Debug for EnglishModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishModel").finish_non_exhaustive()
    }
}

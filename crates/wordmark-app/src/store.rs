use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use wordmark_core::{VocabularyStatus, VocabularyStore};

/// Vocabulary status persisted as `{"lemma": 0|1}` JSON
#[derive(Debug, Default)]
pub struct JsonVocabularyStore {
    path: PathBuf,
    entries: HashMap<String, VocabularyStatus>,
}

impl JsonVocabularyStore {
    /// A missing file is an empty store
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::info!("No vocabulary at {}, starting empty", path.display());
            return Ok(Self {
                path,
                entries: HashMap::new(),
            });
        }

        let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        let raw: HashMap<String, u8> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid vocabulary file {}", path.display()))?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (lemma, code) in raw {
            match VocabularyStatus::from_code(code) {
                Some(status) => {
                    entries.insert(lemma, status);
                }
                None => tracing::warn!("Ignoring '{}' with unknown status code {}", lemma, code),
            }
        }

        tracing::info!("Loaded {} vocabulary entries", entries.len());
        Ok(Self { path, entries })
    }

    /// Write through a temp file in the same directory, then rename over the target
    pub fn save(&self) -> anyhow::Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let sorted: BTreeMap<&str, u8> = self
            .entries
            .iter()
            .map(|(lemma, status)| (lemma.as_str(), status.code()))
            .collect();

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &sorted)?;
            writer.flush()?;
        }
        temp_file
            .persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        tracing::debug!("Saved {} vocabulary entries", sorted.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, status: VocabularyStatus) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }
}

impl VocabularyStore for JsonVocabularyStore {
    fn status(&self, lemma: &str) -> Option<VocabularyStatus> {
        self.entries.get(lemma).copied()
    }

    fn set_status(&mut self, lemma: &str, status: VocabularyStatus) {
        self.entries.insert(lemma.to_string(), status);
    }

    fn remove(&mut self, lemma: &str) -> Option<VocabularyStatus> {
        self.entries.remove(lemma)
    }
}

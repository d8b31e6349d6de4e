use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use wordmark_definitions::DefinitionSource;

use crate::template::NoteTemplate;

/// Folder of per-word notes, one `<lemma>.md` each
#[derive(Debug, Clone)]
pub struct NoteVault {
    folder: PathBuf,
    template: NoteTemplate,
}

impl NoteVault {
    pub fn new(folder: impl Into<PathBuf>, template: NoteTemplate) -> Self {
        Self {
            folder: folder.into(),
            template,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn note_path(&self, lemma: &str) -> Result<PathBuf> {
        if lemma.is_empty() || lemma.contains(['/', '\\']) || lemma.starts_with('.') {
            bail!("Invalid note name: {lemma:?}");
        }
        Ok(self.folder.join(format!("{lemma}.md")))
    }

    /// Write the note for `lemma`. An existing note is left alone.
    ///
    /// Returns `false` when the note was already there.
    pub async fn create(
        &self,
        lemma: &str,
        source: &dyn DefinitionSource,
        lang: &str,
    ) -> Result<bool> {
        let path = self.note_path(lemma)?;
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!("Note for '{}' already exists", lemma);
            return Ok(false);
        }

        let word = source
            .fetch_definition(lemma, lang)
            .await
            .with_context(|| format!("{} lookup failed for '{}'", source.name(), lemma))?;
        let body = self.template.render(&word);

        tokio::fs::create_dir_all(&self.folder)
            .await
            .with_context(|| format!("Failed to create {}", self.folder.display()))?;
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Created note {}", path.display());
        Ok(true)
    }

    /// Delete the note for `lemma` if present
    pub async fn remove(&self, lemma: &str) -> Result<bool> {
        let path = self.note_path(lemma)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("Removed note {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wordmark_definitions::{DefinitionError, DictionaryWord};

    use super::*;

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DefinitionSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
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
            self.calls.fetch_add(1, Ordering::SeqCst);
            if word == "zzz" {
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

    fn vault(dir: &Path) -> NoteVault {
        let template = NoteTemplate::new("# {{word}}".into(), String::new(), String::new(), String::new());
        NoteVault::new(dir.join("Vocabulary"), template)
    }

    #[tokio::test]
    async fn creates_once_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(dir.path());
        let source = CountingSource::default();

        assert!(vault.create("fox", &source, "en").await.unwrap());
        let path = vault.note_path("fox").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# fox");

        std::fs::write(&path, "edited").unwrap();
        assert!(!vault.create("fox", &source, "en").await.unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "edited");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        assert!(vault.remove("fox").await.unwrap());
        assert!(!path.exists());
        assert!(!vault.remove("fox").await.unwrap());
    }

    #[tokio::test]
    async fn failed_lookup_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(dir.path());

        assert!(vault.create("zzz", &CountingSource::default(), "en").await.is_err());
        assert!(!vault.note_path("zzz").unwrap().exists());
    }

    #[test]
    fn rejects_path_like_names() {
        let vault = vault(Path::new("/tmp"));
        assert!(vault.note_path("../etc").is_err());
        assert!(vault.note_path("").is_err());
    }
}

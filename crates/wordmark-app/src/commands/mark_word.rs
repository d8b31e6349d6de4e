use std::path::Path;

use anyhow::{Context, bail};
use wordmark_core::{
    CursorContext, TextCursor, VocabularyStatus, add_bracket, remove_bracket, selected_surface_word,
};

use crate::state::AppState;

/// How the word was pointed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordTarget {
    /// Typed or selected text
    Word(String),
    /// Caret position in the document, in bytes
    Offset(usize),
}

impl WordTarget {
    pub fn from_args(word: Option<String>, at: Option<usize>) -> anyhow::Result<Self> {
        match (word, at) {
            (Some(word), None) => Ok(WordTarget::Word(word)),
            (None, Some(offset)) => Ok(WordTarget::Offset(offset)),
            _ => bail!("Give either a word or --at <offset>"),
        }
    }
}

/// A selection with no caret behind it
struct Selected<'a>(&'a str);

impl CursorContext for Selected<'_> {
    fn selection(&self) -> Option<&str> {
        Some(self.0)
    }

    fn word_at_cursor(&self) -> &str {
        ""
    }
}

/// Set the status of every lemma the surface word maps to and update its brackets.
///
/// Returns the affected lemmas.
pub async fn handle_mark_word(
    state: &AppState,
    path: &Path,
    target: WordTarget,
    status: VocabularyStatus,
) -> anyhow::Result<Vec<String>> {
    let mut text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let surface = match &target {
        WordTarget::Word(word) => selected_surface_word(&Selected(word)),
        WordTarget::Offset(offset) => selected_surface_word(&TextCursor::at(&text, *offset)),
    };
    if surface.is_empty() {
        bail!("No word at {:?}", target);
    }

    let article = state.analyze(text.clone()).await?;
    let mut lemmas: Vec<String> = article
        .find_surface(&surface)
        .map(|pair| pair.lemma.clone())
        .collect();
    lemmas.sort();
    lemmas.dedup();

    if lemmas.is_empty() {
        bail!("'{}' is not a learnable word in {}", surface, path.display());
    }

    for lemma in &lemmas {
        match status {
            VocabularyStatus::Known => {
                state.mark_known(lemma).await?;
                text = remove_bracket(&text, &article, lemma)?;
            }
            VocabularyStatus::Unknown => {
                state
                    .mark_unknown(lemma)
                    .await
                    .with_context(|| format!("No definition found for '{surface}'"))?;
                text = add_bracket(&text, &article, lemma)?;
            }
        }
    }

    tokio::fs::write(path, &text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    state.save().await?;

    tracing::info!("Marked '{}' as {:?}", surface, status);
    Ok(lemmas)
}

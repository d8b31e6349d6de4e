use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use wordmark_core::{VocabularyStatus, VocabularyStore};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedWord {
    pub surface: String,
    pub lemma: String,
    /// `None` when the lemma was never recorded
    pub status: Option<VocabularyStatus>,
}

impl AnalyzedWord {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(VocabularyStatus::Known) => "known",
            Some(VocabularyStatus::Unknown) => "unknown",
            None => "new",
        }
    }
}

pub async fn handle_analyze(state: &AppState, path: &Path) -> anyhow::Result<Vec<AnalyzedWord>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let article = state.analyze(text).await?;

    let store = state.store.read().await;
    let rows = article
        .sorted()
        .into_iter()
        .map(|pair| AnalyzedWord {
            surface: pair.surface.clone(),
            lemma: pair.lemma.clone(),
            status: store.status(&pair.lemma),
        })
        .collect();

    Ok(rows)
}

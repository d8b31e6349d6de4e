use std::path::Path;

use anyhow::Context;
use wordmark_core::{add_bracket, lemmas_to_mark};

use crate::state::AppState;

#[derive(Debug, Default)]
pub struct MarkReport {
    pub marked: Vec<String>,
    /// Lemmas whose note could not be written, left unannotated
    pub failed: Vec<String>,
}

pub async fn handle_mark_article(state: &AppState, path: &Path) -> anyhow::Result<MarkReport> {
    let mut text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let article = state.analyze(text.clone()).await?;

    let lemmas: Vec<String> = {
        let store = state.store.read().await;
        lemmas_to_mark(&article, &*store)
            .into_iter()
            .map(String::from)
            .collect()
    };
    tracing::info!("Marking {} lemma(s) in {}", lemmas.len(), path.display());

    let mut report = MarkReport::default();
    for lemma in lemmas {
        match state.mark_unknown(&lemma).await {
            Ok(()) => {
                text = add_bracket(&text, &article, &lemma)?;
                report.marked.push(lemma);
            }
            Err(e) => {
                tracing::warn!("Leaving '{}' unmarked: {:#}", lemma, e);
                report.failed.push(lemma);
            }
        }
    }

    tokio::fs::write(path, &text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    state.save().await?;

    Ok(report)
}

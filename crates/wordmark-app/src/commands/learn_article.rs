use std::path::Path;

use anyhow::Context;
use wordmark_core::lemmas_to_learn;

use crate::state::AppState;

/// Every lemma not explicitly unknown becomes known. The document is not modified.
pub async fn handle_learn_article(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let article = state.analyze(text).await?;

    let lemmas: Vec<String> = {
        let store = state.store.read().await;
        lemmas_to_learn(&article, &*store)
            .into_iter()
            .map(String::from)
            .collect()
    };

    for lemma in &lemmas {
        state.mark_known(lemma).await?;
    }
    state.save().await?;

    tracing::info!("Learned {} lemma(s) from {}", lemmas.len(), path.display());
    Ok(lemmas.len())
}

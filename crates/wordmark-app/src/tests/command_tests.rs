//! Commands against real files in a temp dir

use std::path::{Path, PathBuf};

use wordmark_core::{VocabularyStatus, VocabularyStore};

use super::test_state;
use crate::commands::analyze::handle_analyze;
use crate::commands::learn_article::handle_learn_article;
use crate::commands::mark_article::handle_mark_article;
use crate::commands::mark_word::{WordTarget, handle_mark_word};
use crate::store::JsonVocabularyStore;

fn write_doc(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("article.md");
    std::fs::write(&path, text).unwrap();
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn mark_article_brackets_unknown_words() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "I like cats.");
    let state = test_state(dir.path(), &[]);
    state.store.write().await.set_status("like", VocabularyStatus::Known);

    let report = handle_mark_article(&state, &doc).await.unwrap();

    assert_eq!(report.marked, ["cat"]);
    assert_eq!(read(&doc), "I like [[cat|cats]].");
    assert!(dir.path().join("Vocabulary").join("cat.md").exists());

    let saved = JsonVocabularyStore::load(state.config.vocabulary.store_path()).unwrap();
    assert_eq!(saved.status("cat"), Some(VocabularyStatus::Unknown));
}

#[tokio::test]
async fn mark_article_twice_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "The quick foxes are running.");
    let state = test_state(dir.path(), &[]);

    handle_mark_article(&state, &doc).await.unwrap();
    let once = read(&doc);
    handle_mark_article(&state, &doc).await.unwrap();

    assert_eq!(read(&doc), once);
    assert!(once.contains("[[fox|foxes]]"));
    assert!(once.contains("[[run|running]]"));
    assert!(once.starts_with("The "));
}

#[tokio::test]
async fn mark_article_reaches_uncommon_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "The reluctant diplomat scrutinized ambiguous proposals.");
    let state = test_state(dir.path(), &[]);

    let report = handle_mark_article(&state, &doc).await.unwrap();

    assert_eq!(report.marked.len(), 5, "{:?}", report.marked);
    assert_eq!(
        read(&doc),
        "The [[reluctant|reluctant]] [[diplomat|diplomat]] [[scrutinize|scrutinized]] \
         [[ambiguous|ambiguous]] [[proposal|proposals]]."
    );
    assert!(dir.path().join("Vocabulary").join("scrutinize.md").exists());
}

#[tokio::test]
async fn failed_lookup_leaves_word_plain() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "I like cats.");
    let state = test_state(dir.path(), &["cat"]);

    let report = handle_mark_article(&state, &doc).await.unwrap();

    assert_eq!(report.failed, ["cat"]);
    assert_eq!(read(&doc), "I [[like|like]] cats.");
    assert!(!dir.path().join("Vocabulary").join("cat.md").exists());
}

#[tokio::test]
async fn learn_article_keeps_unknown_words() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "I like cats and dogs.");
    let state = test_state(dir.path(), &[]);
    state.store.write().await.set_status("dog", VocabularyStatus::Unknown);

    let learned = handle_learn_article(&state, &doc).await.unwrap();

    assert_eq!(learned, 2);
    let store = state.store.read().await;
    assert_eq!(store.status("cat"), Some(VocabularyStatus::Known));
    assert_eq!(store.status("like"), Some(VocabularyStatus::Known));
    assert_eq!(store.status("dog"), Some(VocabularyStatus::Unknown));
    assert_eq!(read(&doc), "I like cats and dogs.");
}

#[tokio::test]
async fn known_word_loses_brackets_and_note() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "I like cats.");
    let state = test_state(dir.path(), &[]);
    state.store.write().await.set_status("like", VocabularyStatus::Known);
    handle_mark_article(&state, &doc).await.unwrap();
    assert_eq!(read(&doc), "I like [[cat|cats]].");

    let lemmas = handle_mark_word(&state, &doc, WordTarget::Word("cats".into()), VocabularyStatus::Known)
        .await
        .unwrap();

    assert_eq!(lemmas, ["cat"]);
    assert_eq!(read(&doc), "I like cats.");
    assert!(!dir.path().join("Vocabulary").join("cat.md").exists());
    assert_eq!(state.store.read().await.status("cat"), Some(VocabularyStatus::Known));
}

#[tokio::test]
async fn unknown_word_at_caret_is_bracketed() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "Foxes run fast.");
    let state = test_state(dir.path(), &[]);

    let lemmas = handle_mark_word(&state, &doc, WordTarget::Offset(2), VocabularyStatus::Unknown)
        .await
        .unwrap();

    assert_eq!(lemmas, ["fox"]);
    assert_eq!(read(&doc), "[[fox|Foxes]] run fast.");
    assert!(dir.path().join("Vocabulary").join("fox.md").exists());
}

#[tokio::test]
async fn unlearnable_word_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "The cat.");
    let state = test_state(dir.path(), &[]);

    let err = handle_mark_word(&state, &doc, WordTarget::Word("The".into()), VocabularyStatus::Unknown).await;
    assert!(err.is_err());
    assert_eq!(read(&doc), "The cat.");
}

#[tokio::test]
async fn analyze_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "I like [[cat|cats]].");
    let state = test_state(dir.path(), &[]);
    state.store.write().await.set_status("cat", VocabularyStatus::Unknown);

    let rows = handle_analyze(&state, &doc).await.unwrap();
    let labels: Vec<(&str, &str)> = rows.iter().map(|r| (r.surface.as_str(), r.status_label())).collect();

    assert_eq!(labels, [("cats", "unknown"), ("like", "new")]);
}

#[test]
fn word_target_needs_exactly_one_source() {
    assert_eq!(WordTarget::from_args(Some("cat".into()), None).unwrap(), WordTarget::Word("cat".into()));
    assert_eq!(WordTarget::from_args(None, Some(4)).unwrap(), WordTarget::Offset(4));
    assert!(WordTarget::from_args(None, None).is_err());
}

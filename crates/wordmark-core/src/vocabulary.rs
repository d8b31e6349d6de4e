use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::article::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyStatus {
    Unknown,
    Known,
}

impl VocabularyStatus {
    /// Numeric code used by the on-disk vocabulary file
    pub fn code(&self) -> u8 {
        match self {
            VocabularyStatus::Unknown => 0,
            VocabularyStatus::Known => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(VocabularyStatus::Unknown),
            1 => Some(VocabularyStatus::Known),
            _ => None,
        }
    }
}

/// Per-lemma learning status owned by the caller
pub trait VocabularyStore {
    /// `None` when the lemma has never been recorded
    fn status(&self, lemma: &str) -> Option<VocabularyStatus>;

    fn set_status(&mut self, lemma: &str, status: VocabularyStatus);

    fn remove(&mut self, lemma: &str) -> Option<VocabularyStatus>;
}

impl VocabularyStore for HashMap<String, VocabularyStatus> {
    fn status(&self, lemma: &str) -> Option<VocabularyStatus> {
        self.get(lemma).copied()
    }

    fn set_status(&mut self, lemma: &str, status: VocabularyStatus) {
        self.insert(lemma.to_string(), status);
    }

    fn remove(&mut self, lemma: &str) -> Option<VocabularyStatus> {
        HashMap::remove(self, lemma)
    }
}

/// Lemmas of `article` the reader does not know yet, sorted
pub fn lemmas_to_mark<'a>(article: &'a Article, store: &impl VocabularyStore) -> Vec<&'a str> {
    article
        .lemmas()
        .into_iter()
        .filter(|lemma| store.status(lemma) != Some(VocabularyStatus::Known))
        .collect()
}

/// Lemmas of `article` that were not explicitly marked unknown, sorted
pub fn lemmas_to_learn<'a>(article: &'a Article, store: &impl VocabularyStore) -> Vec<&'a str> {
    article
        .lemmas()
        .into_iter()
        .filter(|lemma| store.status(lemma) != Some(VocabularyStatus::Unknown))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::WordPair;

    fn sample() -> (Article, HashMap<String, VocabularyStatus>) {
        let article: Article = [
            WordPair::new("cats", "cat"),
            WordPair::new("dogs", "dog"),
            WordPair::new("foxes", "fox"),
        ]
        .into_iter()
        .collect();

        let mut store: HashMap<String, VocabularyStatus> = HashMap::new();
        store.set_status("cat", VocabularyStatus::Known);
        store.set_status("dog", VocabularyStatus::Unknown);
        (article, store)
    }

    #[test]
    fn marking_skips_known_lemmas() {
        let (article, store) = sample();
        assert_eq!(lemmas_to_mark(&article, &store), vec!["dog", "fox"]);
    }

    #[test]
    fn learning_skips_unknown_lemmas() {
        let (article, store) = sample();
        assert_eq!(lemmas_to_learn(&article, &store), vec!["cat", "fox"]);
    }

    #[test]
    fn codes_round_trip() {
        for status in [VocabularyStatus::Known, VocabularyStatus::Unknown] {
            assert_eq!(VocabularyStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(VocabularyStatus::from_code(7), None);
    }

    #[test]
    fn absent_lemmas_have_no_status() {
        let (_, mut store) = sample();
        assert_eq!(store.status("fox"), None);
        assert_eq!(VocabularyStore::remove(&mut store, "cat"), Some(VocabularyStatus::Known));
        assert_eq!(store.status("cat"), None);
    }
}

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use wordmark_core::PosTag;

use crate::loader::LoadError;

// JSON layout of a word list file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WordListJson {
    noun: Vec<String>,
    verb: Vec<String>,
    adj: Vec<String>,
    adv: Vec<String>,
    stop: Vec<String>,
    exceptions: ExceptionsJson,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExceptionsJson {
    noun: HashMap<String, Vec<String>>,
    verb: HashMap<String, Vec<String>>,
    adj: HashMap<String, Vec<String>>,
    adv: HashMap<String, Vec<String>>,
}

/// Stop words, base forms per part of speech and irregular inflections.
///
/// The embedded list only carries stop words. User lists add base forms
/// for words the tagging dictionary lacks.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    bases: HashMap<PosTag, HashSet<String>>,
    stop: HashSet<String>,
    exceptions: HashMap<PosTag, HashMap<String, Vec<String>>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the JSON word list format
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: WordListJson = serde_json::from_str(json_str)?;

        let mut list = Self::new();
        for (pos, words) in [
            (PosTag::Noun, data.noun),
            (PosTag::Verb, data.verb),
            (PosTag::Adj, data.adj),
            (PosTag::Adv, data.adv),
        ] {
            for word in words {
                list.insert_base(pos, &word);
            }
        }
        for word in data.stop {
            list.insert_stop_word(&word);
        }
        for (pos, table) in [
            (PosTag::Noun, data.exceptions.noun),
            (PosTag::Verb, data.exceptions.verb),
            (PosTag::Adj, data.exceptions.adj),
            (PosTag::Adv, data.exceptions.adv),
        ] {
            for (form, bases) in table {
                list.insert_exception(pos, &form, bases);
            }
        }

        Ok(list)
    }

    pub fn insert_base(&mut self, pos: PosTag, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.bases.entry(pos).or_default().insert(word);
        }
    }

    pub fn insert_stop_word(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.stop.insert(word);
        }
    }

    pub fn insert_exception(&mut self, pos: PosTag, form: &str, bases: Vec<String>) {
        let bases: Vec<String> = bases.into_iter().map(|b| b.trim().to_lowercase()).collect();
        self.exceptions
            .entry(pos)
            .or_default()
            .insert(form.trim().to_lowercase(), bases);
    }

    /// True when `word` is a dictionary form for `pos`
    pub fn contains(&self, pos: PosTag, word: &str) -> bool {
        self.bases.get(&pos).is_some_and(|words| words.contains(word))
    }

    /// True when `word` is a dictionary form for any part of speech
    pub fn contains_any(&self, word: &str) -> bool {
        PosTag::ALL.iter().any(|pos| self.contains(*pos, word))
    }

    /// Function words that are never worth learning
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop.contains(word)
    }

    /// Irregular base forms recorded for `form`
    pub fn exceptions(&self, pos: PosTag, form: &str) -> &[String] {
        self.exceptions
            .get(&pos)
            .and_then(|table| table.get(form))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct (pos, base) entries plus stop words
    pub fn entry_count(&self) -> usize {
        self.bases.values().map(HashSet::len).sum::<usize>() + self.stop.len()
    }

    /// Merge another list into this one, exceptions from `other` win
    pub fn merge(mut self, other: WordList) -> Self {
        for (pos, words) in other.bases {
            self.bases.entry(pos).or_default().extend(words);
        }
        self.stop.extend(other.stop);
        for (pos, table) in other.exceptions {
            self.exceptions.entry(pos).or_default().extend(table);
        }
        self
    }
}

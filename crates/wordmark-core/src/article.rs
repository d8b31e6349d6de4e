use std::collections::{BTreeSet, HashSet};
use std::collections::hash_set;

use serde::Serialize;

use crate::language::{Lexer, Lexicon, PosTag, Tagger};
use crate::lemma::select_lemma;
use crate::normalize::{is_kept_char, normalize, space_boundaries};

/// A word as it appears in a document together with its dictionary form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WordPair {
    pub surface: String,
    pub lemma: String,
}

impl WordPair {
    pub fn new(surface: impl Into<String>, lemma: impl AsRef<str>) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.as_ref().to_lowercase(),
        }
    }
}

/// Deduplicated word pairs of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pairs: HashSet<WordPair>,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the pair was already present
    pub fn insert(&mut self, pair: WordPair) -> bool {
        self.pairs.insert(pair)
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    /// Every pair sharing `lemma`
    pub fn pairs_for_lemma<'a>(&'a self, lemma: &'a str) -> impl Iterator<Item = &'a WordPair> + 'a {
        self.pairs.iter().filter(move |pair| pair.lemma == lemma)
    }

    /// Every pair whose surface is exactly `surface`
    pub fn find_surface<'a>(&'a self, surface: &'a str) -> impl Iterator<Item = &'a WordPair> + 'a {
        self.pairs.iter().filter(move |pair| pair.surface == surface)
    }

    /// Distinct lemmas in sorted order
    pub fn lemmas(&self) -> BTreeSet<&str> {
        self.pairs.iter().map(|pair| pair.lemma.as_str()).collect()
    }

    /// Pairs in a stable order for display
    pub fn sorted(&self) -> Vec<&WordPair> {
        let mut pairs: Vec<&WordPair> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.lemma.cmp(&b.lemma).then_with(|| a.surface.cmp(&b.surface)));
        pairs
    }
}

impl FromIterator<WordPair> for Article {
    fn from_iter<I: IntoIterator<Item = WordPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl Extend<WordPair> for Article {
    fn extend<I: IntoIterator<Item = WordPair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl IntoIterator for Article {
    type Item = WordPair;
    type IntoIter = hash_set::IntoIter<WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Article {
    type Item = &'a WordPair;
    type IntoIter = hash_set::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Turns a document into its learnable word pairs
pub struct ArticleAnalyzer<'a> {
    lexer: &'a dyn Lexer,
    tagger: &'a dyn Tagger,
    lexicon: &'a dyn Lexicon,
}

impl<'a> ArticleAnalyzer<'a> {
    pub fn new(lexer: &'a dyn Lexer, tagger: &'a dyn Tagger, lexicon: &'a dyn Lexicon) -> Self {
        Self {
            lexer,
            tagger,
            lexicon,
        }
    }

    pub fn analyze(&self, text: &str) -> Article {
        let prepared = space_boundaries(&normalize(text));
        let tokens = self.lexer.lex(&prepared);
        let tagged = self.tagger.tag(&tokens);

        let mut article = Article::new();
        for tagged_token in tagged {
            let word = tagged_token.token;
            if word.is_empty() || !word.chars().all(is_kept_char) {
                continue;
            }

            let pos = PosTag::from_fine_tag(&tagged_token.tag);
            let candidates = self.lexicon.lemmas(&word.to_lowercase(), pos);
            match select_lemma(&candidates) {
                Some(lemma) => {
                    article.insert(WordPair::new(word, lemma));
                }
                None => {
                    tracing::trace!("No usable lemma for '{}' ({})", word, pos);
                }
            }
        }

        tracing::debug!("Analyzed {} tokens into {} word pairs", tokens.len(), article.len());
        article
    }
}

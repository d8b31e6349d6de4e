use std::ops::Range;

use regex::{Captures, Regex, RegexBuilder};

use crate::article::Article;
use crate::error::CoreError;
use crate::normalize::is_word_char;

/// Decides whether a candidate match stands alone as a word
pub trait WordBoundary {
    /// `neighbor` is the character next to the match, `None` at either end of the text
    fn is_boundary(&self, neighbor: Option<char>) -> bool;

    fn accepts(&self, text: &str, range: Range<usize>) -> bool {
        let before = text[..range.start].chars().next_back();
        let after = text[range.end..].chars().next();
        self.is_boundary(before) && self.is_boundary(after)
    }
}

/// Rejects matches touching a letter, a combining mark or a link delimiter (`[`, `]`, `|`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkAwareBoundary;

impl WordBoundary for LinkAwareBoundary {
    fn is_boundary(&self, neighbor: Option<char>) -> bool {
        neighbor.is_none_or(|c| !is_word_char(c))
    }
}

/// Inserts and removes `[[lemma|surface]]` annotations
#[derive(Debug, Clone, Default)]
pub struct Annotator<B = LinkAwareBoundary> {
    boundary: B,
}

impl Annotator<LinkAwareBoundary> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: WordBoundary> Annotator<B> {
    pub fn with_boundary(boundary: B) -> Self {
        Self { boundary }
    }

    /// Link every free-standing surface form of `lemma` to the lemma
    pub fn add_bracket(&self, text: &str, article: &Article, lemma: &str) -> Result<String, CoreError> {
        let mut data = text.to_string();
        for pair in article.pairs_for_lemma(lemma) {
            if pair.surface.is_empty() {
                continue;
            }
            let pattern = case_insensitive(&regex::escape(&pair.surface))?;
            data = self.wrap_matches(&data, &pattern, &pair.lemma);
        }
        Ok(data)
    }

    /// Undo `add_bracket` for every surface form of `lemma`
    pub fn remove_bracket(&self, text: &str, article: &Article, lemma: &str) -> Result<String, CoreError> {
        let mut data = text.to_string();
        for pair in article.pairs_for_lemma(lemma) {
            let pattern = case_insensitive(&format!(
                r"\[\[{}\|({})\]\]",
                regex::escape(&pair.lemma),
                regex::escape(&pair.surface)
            ))?;
            data = pattern
                .replace_all(&data, |caps: &Captures<'_>| caps[1].to_string())
                .into_owned();
        }
        Ok(data)
    }

    fn wrap_matches(&self, text: &str, pattern: &Regex, lemma: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(found) = pattern.find_at(text, pos) {
            if found.is_empty() {
                break;
            }
            if self.boundary.accepts(text, found.range()) {
                out.push_str(&text[copied..found.start()]);
                out.push_str("[[");
                out.push_str(lemma);
                out.push('|');
                out.push_str(found.as_str());
                out.push_str("]]");
                copied = found.end();
                pos = found.end();
            } else {
                // Retry one character later, an overlapping match may still stand alone
                let step = text[found.start()..].chars().next().map_or(1, char::len_utf8);
                pos = found.start() + step;
            }
        }

        out.push_str(&text[copied..]);
        out
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, CoreError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// `Annotator::add_bracket` with the link-aware boundary
pub fn add_bracket(text: &str, article: &Article, lemma: &str) -> Result<String, CoreError> {
    Annotator::new().add_bracket(text, article, lemma)
}

/// `Annotator::remove_bracket` with the link-aware boundary
pub fn remove_bracket(text: &str, article: &Article, lemma: &str) -> Result<String, CoreError> {
    Annotator::new().remove_bracket(text, article, lemma)
}

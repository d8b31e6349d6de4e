use std::fmt;

use serde::{Deserialize, Serialize};

/// Lexical resource used to resolve inflected words to dictionary forms
pub trait Lexicon: Send + Sync {
    /// Candidate groups for `word` read as `pos`, best-ranked first.
    ///
    /// Each group is `[lemma, pos-name, ..]`. An empty result means the
    /// resource knows nothing useful about the word.
    fn lemmas(&self, word: &str, pos: PosTag) -> Vec<Vec<String>>;
}

/// Break prepared text into the tokens a tagger expects
pub trait Lexer: Send + Sync {
    fn lex(&self, text: &str) -> Vec<String>;
}

/// Part-of-speech tagging over an already lexed token stream
pub trait Tagger: Send + Sync {
    /// Tag every token with a fine-grained (Penn Treebank style) tag
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// Coarse part of speech used for lemma lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Adj,
    Noun,
    Verb,
    Adv,
}

impl PosTag {
    pub const ALL: [PosTag; 4] = [PosTag::Adj, PosTag::Noun, PosTag::Verb, PosTag::Adv];

    /// Collapse a fine-grained tag by its first character.
    ///
    /// Unrecognized tags fall back to `Noun`.
    pub fn from_fine_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => PosTag::Adj,
            Some('N') => PosTag::Noun,
            Some('V') => PosTag::Verb,
            Some('R') => PosTag::Adv,
            _ => PosTag::Noun,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "adj",
            PosTag::Noun => "noun",
            PosTag::Verb => "verb",
            PosTag::Adv => "adv",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

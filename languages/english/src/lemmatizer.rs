use std::sync::Arc;

use wordmark_core::{Lexicon, PosTag};

use crate::model::{EnglishModel, Reading};
use crate::wordlist::WordList;

// Suffix detachment rules, (inflected ending, base ending)
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ied", "y"),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
    ("ier", "y"),
    ("iest", "y"),
];

/// Endings after which a doubled final consonant is undone (running, bigger)
const DOUBLING_ENDINGS: &[&str] = &["ing", "ed", "er", "est"];

/// Dictionary-form lookup.
///
/// The English model's tagging dictionary supplies the readings of every
/// word it knows. Base forms from user word lists are reached with WordNet
/// style detachment rules. Stop words never yield a lemma.
#[derive(Debug, Clone)]
pub struct EnglishLemmatizer {
    model: Arc<EnglishModel>,
    words: Arc<WordList>,
}

impl EnglishLemmatizer {
    pub fn new(model: Arc<EnglishModel>, words: Arc<WordList>) -> Self {
        Self { model, words }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Base-form candidates for `word` read as `pos`, in lookup order.
    ///
    /// The form itself comes first and irregular or inflected readings last.
    pub fn candidates(&self, word: &str, pos: PosTag) -> Vec<String> {
        let word = word.to_lowercase();
        if self.words.is_stop_word(&word) {
            return Vec::new();
        }

        let readings: Vec<Reading> = self
            .model
            .readings(&word)
            .into_iter()
            .filter(|reading| reads_as(reading, pos))
            .collect();

        let mut out: Vec<String> = Vec::new();
        let mut push = |candidate: String| {
            if !self.words.is_stop_word(&candidate) && !out.contains(&candidate) {
                out.push(candidate);
            }
        };

        if self.words.contains(pos, &word) || readings.iter().any(|r| r.lemma == word) {
            push(word.clone());
        }

        for candidate in self.rule_candidates(&word, pos) {
            push(candidate);
        }

        for reading in readings.iter().filter(|r| r.lemma != word) {
            push(reading.lemma.to_lowercase());
        }

        for base in self.words.exceptions(pos, &word) {
            if self.words.contains(pos, base) {
                push(base.clone());
            }
        }

        out
    }

    /// True when `word` has at least one base form for `pos`
    pub fn has_reading(&self, word: &str, pos: PosTag) -> bool {
        !self.candidates(word, pos).is_empty()
    }

    // Detachment rules, kept only where they reach a listed base form
    fn rule_candidates(&self, word: &str, pos: PosTag) -> Vec<String> {
        let mut out = Vec::new();

        for (suffix, ending) in rules_for(pos) {
            if let Some(stem) = word.strip_suffix(suffix) {
                if !stem.is_empty() {
                    out.push(format!("{stem}{ending}"));
                }
            }
        }

        if matches!(pos, PosTag::Verb | PosTag::Adj) {
            for suffix in DOUBLING_ENDINGS {
                if let Some(stem) = word.strip_suffix(suffix).and_then(undouble) {
                    out.push(stem.to_string());
                }
            }
        }

        out.retain(|candidate| self.words.contains(pos, candidate));
        out
    }
}

impl Lexicon for EnglishLemmatizer {
    fn lemmas(&self, word: &str, pos: PosTag) -> Vec<Vec<String>> {
        self.candidates(word, pos)
            .into_iter()
            .map(|lemma| vec![lemma, pos.as_str().to_string()])
            .collect()
    }
}

// Only word-class tags count, a particle (RP) is not an adverb
fn reads_as(reading: &Reading, pos: PosTag) -> bool {
    let class = match reading.tag.chars().next() {
        Some('J') => PosTag::Adj,
        Some('N') => PosTag::Noun,
        Some('V') => PosTag::Verb,
        Some('R') if reading.tag != "RP" => PosTag::Adv,
        _ => return false,
    };
    class == pos
}

fn rules_for(pos: PosTag) -> &'static [(&'static str, &'static str)] {
    match pos {
        PosTag::Noun => NOUN_RULES,
        PosTag::Verb => VERB_RULES,
        PosTag::Adj => ADJ_RULES,
        PosTag::Adv => &[],
    }
}

// "runn" -> "run", only for a doubled consonant
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::WordListLoader;

    fn lemmatizer() -> EnglishLemmatizer {
        lemmatizer_with(WordListLoader::load_embedded().unwrap())
    }

    fn lemmatizer_with(words: WordList) -> EnglishLemmatizer {
        EnglishLemmatizer::new(EnglishModel::shared().unwrap(), Arc::new(words))
    }

    fn first(lemmatizer: &EnglishLemmatizer, word: &str, pos: PosTag) -> Option<String> {
        wordmark_core::select_lemma(&lemmatizer.lemmas(word, pos))
    }

    #[test]
    fn regular_plurals() {
        let l = lemmatizer();
        assert_eq!(first(&l, "foxes", PosTag::Noun).as_deref(), Some("fox"));
        assert_eq!(first(&l, "cities", PosTag::Noun).as_deref(), Some("city"));
        assert_eq!(first(&l, "proposals", PosTag::Noun).as_deref(), Some("proposal"));
    }

    #[test]
    fn verb_inflections() {
        let l = lemmatizer();
        assert_eq!(first(&l, "running", PosTag::Verb).as_deref(), Some("run"));
        assert_eq!(first(&l, "stopped", PosTag::Verb).as_deref(), Some("stop"));
        assert_eq!(first(&l, "scrutinized", PosTag::Verb).as_deref(), Some("scrutinize"));
        assert_eq!(first(&l, "concatenates", PosTag::Verb).as_deref(), Some("concatenate"));
    }

    #[test]
    fn irregular_forms_come_last() {
        let l = lemmatizer();
        let groups = l.lemmas("saw", PosTag::Verb);
        assert_eq!(groups.first().map(|g| g[0].as_str()), Some("saw"));
        assert_eq!(first(&l, "saw", PosTag::Verb).as_deref(), Some("see"));
        assert_eq!(first(&l, "mice", PosTag::Noun).as_deref(), Some("mouse"));
        assert_eq!(first(&l, "wrote", PosTag::Verb).as_deref(), Some("write"));
    }

    #[test]
    fn uncommon_base_forms_are_their_own_lemma() {
        let l = lemmatizer();
        assert_eq!(first(&l, "reluctant", PosTag::Adj).as_deref(), Some("reluctant"));
        assert_eq!(first(&l, "ubiquitous", PosTag::Adj).as_deref(), Some("ubiquitous"));
        assert_eq!(first(&l, "vocabulary", PosTag::Noun).as_deref(), Some("vocabulary"));
        assert_eq!(first(&l, "mitigate", PosTag::Verb).as_deref(), Some("mitigate"));
    }

    #[test]
    fn groups_carry_the_part_of_speech() {
        let l = lemmatizer();
        assert_eq!(l.lemmas("fox", PosTag::Noun)[0], vec!["fox".to_string(), "noun".to_string()]);
    }

    #[test]
    fn stop_words_have_no_lemma() {
        let l = lemmatizer();
        for pos in PosTag::ALL {
            assert!(l.lemmas("the", pos).is_empty());
            assert!(l.lemmas("can", pos).is_empty());
        }
        // "are" reads as "be", which is a stop word too
        assert!(l.lemmas("are", PosTag::Verb).is_empty());
        assert!(!l.has_reading("xyzzy", PosTag::Noun));
    }

    #[test]
    fn word_list_bases_reach_words_the_model_lacks() {
        let words = WordList::from_json(
            r#"{"noun": ["blorf"], "verb": ["glorp"], "exceptions": {"verb": {"glarp": ["glorp"]}}}"#,
        )
        .unwrap();
        let l = lemmatizer_with(words);

        assert_eq!(first(&l, "blorfs", PosTag::Noun).as_deref(), Some("blorf"));
        assert_eq!(first(&l, "glorpping", PosTag::Verb).as_deref(), Some("glorp"));
        assert_eq!(first(&l, "glarp", PosTag::Verb).as_deref(), Some("glorp"));
        assert!(l.lemmas("blorfs", PosTag::Verb).is_empty());
    }
}

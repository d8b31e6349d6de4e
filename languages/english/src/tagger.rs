use std::sync::Arc;

use wordmark_core::{TaggedToken, Tagger};

use crate::model::{EnglishModel, ModelToken, Reading};

/// How far ahead a lexer token is searched for among the model's tokens
const ALIGN_WINDOW: usize = 4;

/// Penn Treebank tagger backed by the English model.
///
/// The model sees the tokens joined by spaces and tags them in context.
/// Its tokens are aligned back onto the lexer's by text; a token it split
/// differently, or a word it has no reading for, falls back to a tag
/// guessed from the word's shape.
#[derive(Debug, Clone)]
pub struct EnglishTagger {
    model: Arc<EnglishModel>,
}

impl EnglishTagger {
    pub fn new(model: Arc<EnglishModel>) -> Self {
        Self { model }
    }
}

impl Tagger for EnglishTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let analyzed = self.model.analyze(&tokens.join(" "));
        let mut cursor = 0;

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let found = analyzed[cursor.min(analyzed.len())..]
                    .iter()
                    .take(ALIGN_WINDOW)
                    .position(|candidate| candidate.text == *token);

                let tag = match found {
                    Some(offset) => {
                        let model_token = &analyzed[cursor + offset];
                        cursor += offset + 1;
                        context_tag(model_token)
                    }
                    None => None,
                };

                let tag = tag.unwrap_or_else(|| {
                    let sentence_initial = i == 0 || matches!(tokens[i - 1].as_str(), "." | "!" | "?");
                    shape_tag(token, sentence_initial)
                });
                TaggedToken::new(token.as_str(), tag)
            })
            .collect()
    }
}

/// Pick the reading that fits the token's chunk, the first word-class reading otherwise
fn context_tag(token: &ModelToken) -> Option<String> {
    let readings: Vec<&Reading> = token.readings.iter().filter(|r| !r.is_marker()).collect();
    if readings.is_empty() {
        return None;
    }

    let by_class = |class: char| readings.iter().find(|r| r.tag.starts_with(class) && !is_particle(r));
    let chosen = preferred_classes(&token.chunks)
        .iter()
        .find_map(|class| by_class(*class))
        .or_else(|| readings.iter().find(|r| is_content(r)))
        .unwrap_or(&readings[0]);

    Some(chosen.tag.clone())
}

// Word classes a chunk favours, in order
fn preferred_classes(chunks: &[String]) -> &'static [char] {
    let has = |needle: &str| chunks.iter().any(|chunk| chunk.contains(needle));

    if has("VP") {
        &['V']
    } else if chunks.iter().any(|chunk| chunk.starts_with("E-NP")) {
        &['N', 'J']
    } else if has("NP") {
        &['J', 'N']
    } else if has("ADJP") {
        &['J']
    } else if has("ADVP") {
        &['R']
    } else {
        &[]
    }
}

fn is_content(reading: &Reading) -> bool {
    reading.tag.starts_with(['J', 'N', 'V', 'R']) && !is_particle(reading)
}

fn is_particle(reading: &Reading) -> bool {
    reading.tag == "RP"
}

fn shape_tag(token: &str, sentence_initial: bool) -> String {
    if token.chars().all(|c| c.is_ascii_digit()) {
        return "CD".to_string();
    }
    if !token.chars().any(char::is_alphanumeric) {
        return token.to_string();
    }
    if !sentence_initial && token.chars().next().is_some_and(char::is_uppercase) {
        return "NNP".to_string();
    }

    let lower = token.to_lowercase();
    let tag = if lower.ends_with("ly") {
        "RB"
    } else if lower.ends_with("ing") {
        "VBG"
    } else if lower.ends_with("ed") {
        "VBN"
    } else if ["al", "ous", "ful", "ive", "able", "ible", "ic", "less"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        "JJ"
    } else if lower.ends_with('s') {
        "NNS"
    } else {
        "NN"
    };
    tag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> EnglishTagger {
        EnglishTagger::new(EnglishModel::shared().unwrap())
    }

    fn tags(sentence: &str) -> Vec<String> {
        let tokens: Vec<String> = sentence.split_whitespace().map(String::from).collect();
        tagger().tag(&tokens).into_iter().map(|t| t.tag).collect()
    }

    fn class(tag: &str) -> char {
        tag.chars().next().unwrap_or(' ')
    }

    #[test]
    fn tags_a_simple_sentence() {
        let tags = tags("The quick foxes are running .");
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[0], "DT");
        assert_eq!(tags[2], "NNS");
        assert_eq!(class(&tags[3]), 'V');
        assert_eq!(tags[4], "VBG");
    }

    #[test]
    fn tags_uncommon_words_from_the_dictionary() {
        let tags = tags("The reluctant diplomat scrutinized ambiguous proposals to mitigate ubiquitous corruption .");
        let classes: Vec<char> = tags.iter().map(|t| class(t)).collect();
        assert_eq!(classes[1], 'J', "reluctant: {tags:?}");
        assert_eq!(classes[2], 'N', "diplomat: {tags:?}");
        assert_eq!(classes[3], 'V', "scrutinized: {tags:?}");
        assert_eq!(classes[4], 'J', "ambiguous: {tags:?}");
        assert_eq!(tags[5], "NNS");
        assert_eq!(classes[7], 'V', "mitigate: {tags:?}");
        assert_eq!(classes[8], 'J', "ubiquitous: {tags:?}");
        assert_eq!(classes[9], 'N', "corruption: {tags:?}");
    }

    #[test]
    fn context_picks_between_noun_and_verb() {
        let verb = tags("They want to run .");
        assert_eq!(class(&verb[3]), 'V');
        let noun = tags("It was a long run .");
        assert_eq!(class(&noun[4]), 'N');
    }

    #[test]
    fn unknown_words_use_shape() {
        assert_eq!(shape_tag("Zorblax", false), "NNP");
        assert_eq!(shape_tag("glorped", true), "VBN");
        assert_eq!(shape_tag("frumiously", true), "RB");
        assert_eq!(shape_tag("blorfs", true), "NNS");
        assert_eq!(shape_tag("42", false), "CD");
        assert_eq!(shape_tag("!", false), "!");
    }

    #[test]
    fn every_token_gets_a_tag() {
        let tokens: Vec<String> = ["Blorfs", "can't", "glorp", "42", "!"].map(String::from).to_vec();
        let tagged = tagger().tag(&tokens);
        assert_eq!(tagged.len(), tokens.len());
        assert!(tagged.iter().all(|t| !t.tag.is_empty()));
        assert_eq!(tagged[0].token, "Blorfs");
    }
}

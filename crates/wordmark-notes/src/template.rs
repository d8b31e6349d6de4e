use wordmark_config::notes::NotesConfig;
use wordmark_definitions::DictionaryWord;

/// Markdown layout of a vocabulary note
#[derive(Debug, Clone)]
pub struct NoteTemplate {
    pub general: String,
    pub meaning: String,
    pub phonetic: String,
    pub definition: String,
}

impl NoteTemplate {
    pub fn new(general: String, meaning: String, phonetic: String, definition: String) -> Self {
        Self {
            general,
            meaning,
            phonetic,
            definition,
        }
    }

    /// Render the note body for a dictionary entry
    pub fn render(&self, word: &DictionaryWord) -> String {
        let meanings: String = word
            .meanings
            .iter()
            .map(|meaning| {
                let definitions: String = meaning
                    .definitions
                    .iter()
                    .map(|d| self.definition.replace("{{definition}}", &d.definition))
                    .collect();
                self.meaning
                    .replace("{{partOfSpeech}}", &meaning.part_of_speech)
                    .replace("{{definitions}}", &definitions)
            })
            .collect();

        let phonetics: String = word
            .phonetics
            .iter()
            .map(|phonetic| {
                self.phonetic
                    .replace("{{text}}", phonetic.text.as_deref().unwrap_or_default())
                    .replace("{{audio}}", phonetic.audio.as_deref().unwrap_or_default())
            })
            .collect();

        self.general
            .replace("{{word}}", &word.word)
            .replace("{{origin}}", word.origin.as_deref().unwrap_or("unknown"))
            .replace("{{meanings}}", &meanings)
            .replace("{{phonetics}}", &phonetics)
    }
}

impl From<&NotesConfig> for NoteTemplate {
    fn from(config: &NotesConfig) -> Self {
        Self::new(
            config.general_template.clone(),
            config.meaning_template.clone(),
            config.phonetic_template.clone(),
            config.definition_template.clone(),
        )
    }
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self::from(&NotesConfig::default())
    }
}

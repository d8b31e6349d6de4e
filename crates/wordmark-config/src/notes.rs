use serde::{Deserialize, Serialize};

fn default_folder() -> String {
    "Vocabulary".to_string()
}

fn default_general_template() -> String {
    "---\ntags: [review]\nrate: 1\n---\n\n# {{word}}\n\n**origin:** {{origin}}\n\n{{phonetics}}\n\n## Meanings\n\n{{meanings}}\n"
        .to_string()
}

fn default_meaning_template() -> String {
    "### {{partOfSpeech}}\n\n{{definitions}}".to_string()
}

fn default_phonetic_template() -> String {
    "[{{text}}]({{audio}})\n".to_string()
}

fn default_definition_template() -> String {
    "> {{definition}}\n\n".to_string()
}

/// Per-word note layout
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotesConfig {
    /// Folder holding one `<lemma>.md` per unknown word
    #[serde(default = "default_folder")]
    pub folder: String,
    /// `{{word}}`, `{{origin}}`, `{{phonetics}}`, `{{meanings}}`
    #[serde(default = "default_general_template")]
    pub general_template: String,
    /// `{{partOfSpeech}}`, `{{definitions}}`
    #[serde(default = "default_meaning_template")]
    pub meaning_template: String,
    /// `{{text}}`, `{{audio}}`
    #[serde(default = "default_phonetic_template")]
    pub phonetic_template: String,
    /// `{{definition}}`
    #[serde(default = "default_definition_template")]
    pub definition_template: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            general_template: default_general_template(),
            meaning_template: default_meaning_template(),
            phonetic_template: default_phonetic_template(),
            definition_template: default_definition_template(),
        }
    }
}

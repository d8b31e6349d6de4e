use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "free-dictionary".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Look up definitions when a word is marked unknown
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Extra word list files merged into the embedded one
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            language: default_language(),
            api_url: default_api_url(),
            additional_paths: vec![],
        }
    }
}

use async_trait::async_trait;
use wordmark_definitions::{DefinitionError, DefinitionSource, DictionaryWord};

pub const FREE_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";

/// Client for dictionaryapi.dev
#[derive(Clone)]
pub struct FreeDictionaryApi {
    client: reqwest::Client,
    api_url: String,
}

impl FreeDictionaryApi {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn entry_url(&self, word: &str, lang: &str) -> String {
        format!("{}/{}/{}", self.api_url, lang, word.to_lowercase())
    }
}

impl Default for FreeDictionaryApi {
    fn default() -> Self {
        Self::new(FREE_DICTIONARY_URL.to_string())
    }
}

/// Parse a response body, taking the first entry of the array
pub fn parse_entries(word: &str, body: &str) -> Result<DictionaryWord, DefinitionError> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    // Misses come back as {"title": "No Definitions Found", ...}
    if json.get("title").is_some() {
        return Err(DefinitionError::NotFound {
            word: word.to_string(),
        });
    }

    let entries: Vec<DictionaryWord> = serde_json::from_value(json)?;
    entries
        .into_iter()
        .next()
        .ok_or_else(|| DefinitionError::NotFound {
            word: word.to_string(),
        })
}

#[async_trait]
impl DefinitionSource for FreeDictionaryApi {
    fn name(&self) -> &str {
        "Free Dictionary API"
    }

    fn homepage_url(&self) -> &str {
        "https://dictionaryapi.dev/"
    }

    fn is_offline(&self) -> bool {
        false
    }

    async fn fetch_definition(
        &self,
        word: &str,
        lang: &str,
    ) -> Result<DictionaryWord, DefinitionError> {
        let url = self.entry_url(word, lang);
        tracing::debug!("Fetching definition from {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == 404 {
            return Err(DefinitionError::NotFound {
                word: word.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(DefinitionError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_entries(word, &body)
    }
}

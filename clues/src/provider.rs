//! Generating clues for a solved grid.

use crate::error::ClueError;
use crate::util::http_client;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Theme, difficulty, and clue text for every across/down slot, keyed by
/// clue number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueSet {
    pub theme: String,
    pub difficulty: String,
    pub across: HashMap<u32, String>,
    pub down: HashMap<u32, String>,
}

/// A source of clues for a solved word list, never the grid itself — only
/// the words placed in each numbered slot.
pub enum ClueProvider {
    /// POSTs the word list to a configured HTTP endpoint.
    Http(HttpClueProvider),
    /// Always-available fallback: synthesizes `"N-letter word: WORD"` clues.
    Placeholder,
}

impl ClueProvider {
    /// `HttpClueProvider::from_env`, falling back to the placeholder provider
    /// when the endpoint is unconfigured so the pipeline never blocks on it.
    pub fn from_env_or_placeholder() -> Self {
        match HttpClueProvider::from_env() {
            Ok(http) => ClueProvider::Http(http),
            Err(err) => {
                log::info!("clue endpoint unconfigured ({err}), using placeholder clues");
                ClueProvider::Placeholder
            }
        }
    }

    pub async fn generate(
        &self,
        across: &BTreeMap<u32, String>,
        down: &BTreeMap<u32, String>,
    ) -> Result<ClueSet, ClueError> {
        match self {
            ClueProvider::Http(provider) => match provider.generate(across, down).await {
                Ok(clues) => Ok(clues),
                Err(err) => {
                    log::warn!("clue endpoint request failed ({err}), falling back to placeholder clues");
                    placeholder_clues(across, down)
                }
            },
            ClueProvider::Placeholder => placeholder_clues(across, down),
        }
    }
}

fn placeholder_clues(
    across: &BTreeMap<u32, String>,
    down: &BTreeMap<u32, String>,
) -> Result<ClueSet, ClueError> {
    let placeholder = |word: &String| format!("{}-letter word: {}", word.len(), word);
    Ok(ClueSet {
        theme: "Untitled".to_string(),
        difficulty: "unknown".to_string(),
        across: across.iter().map(|(&n, w)| (n, placeholder(w))).collect(),
        down: down.iter().map(|(&n, w)| (n, placeholder(w))).collect(),
    })
}

#[derive(Serialize)]
struct ClueRequest<'a> {
    across: &'a BTreeMap<u32, String>,
    down: &'a BTreeMap<u32, String>,
}

/// POSTs the solved word list to a configured HTTP endpoint and parses the
/// JSON response into a [`ClueSet`].
pub struct HttpClueProvider {
    endpoint: String,
    api_key: Option<String>,
}

impl HttpClueProvider {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self { endpoint, api_key }
    }

    /// Build a provider from the `PENTACROSS_CLUE_ENDPOINT` and
    /// `PENTACROSS_CLUE_API_KEY` environment variables.
    pub fn from_env() -> Result<Self, ClueError> {
        let endpoint = std::env::var("PENTACROSS_CLUE_ENDPOINT")
            .map_err(|_| ClueError::MissingConfig("PENTACROSS_CLUE_ENDPOINT"))?;
        let api_key = std::env::var("PENTACROSS_CLUE_API_KEY").ok();
        Ok(Self::new(endpoint, api_key))
    }

    async fn generate(
        &self,
        across: &BTreeMap<u32, String>,
        down: &BTreeMap<u32, String>,
    ) -> Result<ClueSet, ClueError> {
        let client = http_client();
        let mut request = client.post(&self.endpoint).json(&ClueRequest { across, down });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClueError::BadStatus(response.status()));
        }

        let clue_set: ClueSet = response.json().await?;
        Ok(clue_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn placeholder_covers_every_slot() {
        let across = BTreeMap::from([(1, "CAT".to_string())]);
        let down = BTreeMap::from([(1, "CAR".to_string()), (2, "TAR".to_string())]);

        let clues = ClueProvider::Placeholder.generate(&across, &down).await.unwrap();
        assert_eq!(clues.across.get(&1).unwrap(), "3-letter word: CAT");
        assert_eq!(clues.down.len(), 2);
    }

    #[test]
    fn missing_endpoint_falls_back_to_placeholder() {
        std::env::remove_var("PENTACROSS_CLUE_ENDPOINT");
        assert!(matches!(ClueProvider::from_env_or_placeholder(), ClueProvider::Placeholder));
    }
}

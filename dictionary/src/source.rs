//! Fetching the frequency-ordered word list, with a disk cache keyed by URL.

use crate::error::DictionaryError;
use std::path::PathBuf;

/// The raw, frequency-ordered word file: one lowercase word per line,
/// most frequent first, exactly as served over HTTP.
pub struct RawWordFile {
    lines: Vec<String>,
}

impl RawWordFile {
    fn from_text(text: &str) -> Self {
        Self { lines: text.lines().map(str::to_string).collect() }
    }

    #[cfg(test)]
    pub(crate) fn from_text_for_test(text: &str) -> Self {
        Self::from_text(text)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

pub struct DictionarySource {
    client: reqwest::Client,
    cache_dir: PathBuf,
}

impl DictionarySource {
    pub fn new() -> Result<Self, DictionaryError> {
        let cache_dir = dirs::cache_dir().ok_or(DictionaryError::NoCacheDir)?.join("pentacross");
        Ok(Self { client: reqwest::Client::new(), cache_dir })
    }

    fn cache_path(&self, url: &str) -> PathBuf {
        let digest = url.bytes().fold(0u64, |acc, b| acc.wrapping_mul(131).wrapping_add(u64::from(b)));
        self.cache_dir.join(format!("wordlist-{digest:016x}.txt"))
    }

    /// Fetch the word list at `url`, serving it from the local disk cache
    /// when a prior run already downloaded it.
    pub async fn fetch(&self, url: &str) -> Result<RawWordFile, DictionaryError> {
        let cache_path = self.cache_path(url);

        if cache_path.exists() {
            log::debug!("loading word list for {url} from cache at {}", cache_path.display());
            let text = std::fs::read_to_string(&cache_path)
                .map_err(|source| DictionaryError::CacheRead { path: cache_path.display().to_string(), source })?;
            return Ok(RawWordFile::from_text(&text));
        }

        log::info!("fetching word list from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| DictionaryError::Fetch { url: url.to_string(), source })?;

        if !response.status().is_success() {
            return Err(DictionaryError::BadStatus { url: url.to_string(), status: response.status() });
        }

        let text = response
            .text()
            .await
            .map_err(|source| DictionaryError::Fetch { url: url.to_string(), source })?;

        if let Some(parent) = cache_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| DictionaryError::CacheWrite { path: cache_path.display().to_string(), source })?;
        }
        std::fs::write(&cache_path, &text)
            .map_err(|source| DictionaryError::CacheWrite { path: cache_path.display().to_string(), source })?;

        Ok(RawWordFile::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_is_stable_for_the_same_url() {
        let source = DictionarySource::new().unwrap();
        assert_eq!(source.cache_path("https://example.com/words.txt"), source.cache_path("https://example.com/words.txt"));
        assert_ne!(source.cache_path("https://example.com/words.txt"), source.cache_path("https://example.com/other.txt"));
    }

    #[test]
    fn parses_one_word_per_line() {
        let file = RawWordFile::from_text("cat\ndog\nbird\n");
        assert_eq!(file.line_count(), 3);
    }
}

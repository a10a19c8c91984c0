use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("fetching word list from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("word list server at {url} returned status {status}")]
    BadStatus { url: String, status: reqwest::StatusCode },

    #[error("reading cached word list at {path}: {source}")]
    CacheRead { path: String, source: std::io::Error },

    #[error("writing cached word list at {path}: {source}")]
    CacheWrite { path: String, source: std::io::Error },

    #[error("could not determine a local cache directory")]
    NoCacheDir,
}

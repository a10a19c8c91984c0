use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClueError {
    #[error("clue endpoint request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("clue endpoint returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("parsing clue endpoint response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("environment variable {0} is not set")]
    MissingConfig(&'static str),
}

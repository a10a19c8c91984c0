//! Clue generation for a solved grid: an HTTP-backed provider with an
//! always-available placeholder fallback, so the pipeline keeps working
//! when the clue endpoint is unconfigured or unreachable.

mod error;
mod provider;
mod util;

pub use error::ClueError;
pub use provider::{ClueProvider, ClueSet, HttpClueProvider};

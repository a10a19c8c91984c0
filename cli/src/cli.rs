//! Command-line surface: one invocation generates one puzzle.

use clap::Parser;

/// Default word list: a frequency-ordered, one-word-per-line, plain-text file.
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-no-swears.txt";

#[derive(Debug, Parser)]
#[command(name = "pentacross", about = "Generate a 5x5 mini crossword puzzle")]
pub struct Args {
    /// Weekday template to fill: monday, tuesday, ..., sunday.
    #[arg(default_value = "monday")]
    pub template: String,

    /// URL of the frequency-ordered word list to fetch (cached on disk after the first run).
    #[arg(long, default_value = DEFAULT_DICTIONARY_URL)]
    pub dictionary_url: String,

    /// Override the solver's random seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Author name recorded in the puzzle's metadata.
    #[arg(long, default_value = "pentacross")]
    pub author: String,

    /// Where to write the assembled JSON document; prints to stdout if omitted.
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,
}

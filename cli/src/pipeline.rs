//! Orchestrates one end-to-end run: fetch dictionary, solve, generate clues,
//! assemble the document. `solve` itself stays synchronous; only the
//! dictionary download and clue request are awaited.

use crate::cli::Args;
use crate::document::{self, Document};
use color_eyre::eyre::{eyre, Result};
use pentacross_clues::ClueProvider;
use pentacross_core::{run_escalation, template, EscalationConfig, LetterIndex, Template};
use pentacross_dictionary::{DictionaryConfig, DictionarySource};
use std::collections::HashMap;

pub async fn run(args: &Args) -> Result<Document> {
    let template = template::lookup(&args.template).ok_or_else(|| eyre!("unknown template '{}'", args.template))?;

    let source = DictionarySource::new()?;
    let raw = source.fetch(&args.dictionary_url).await?;
    let tiers = raw.into_tiers(&DictionaryConfig::default());

    let mut indexes: HashMap<u8, LetterIndex> = HashMap::new();
    indexes.insert(0, LetterIndex::build(&tiers.tier0));
    indexes.insert(1, LetterIndex::build(&tiers.tier1));

    generate(template, &indexes, args.seed, &args.author).await
}

/// The network-free half of the pipeline: solve against an already-built set
/// of tiered indexes, generate clues, and assemble the document.
pub async fn generate(
    template: &Template,
    indexes: &HashMap<u8, LetterIndex>,
    seed: Option<u64>,
    author: &str,
) -> Result<Document> {
    let mut escalation_config = EscalationConfig::default();
    if let Some(seed) = seed {
        escalation_config.solver.seed = seed;
    }

    let outcome = run_escalation(template, indexes, &escalation_config)?;
    log::info!(
        "filled '{}' from tier {} in {} attempts ({} backtracks)",
        template.id,
        outcome.tier,
        outcome.solution.attempts,
        outcome.solution.backtracks
    );

    let clue_provider = ClueProvider::from_env_or_placeholder();
    let clue_set = clue_provider.generate(&outcome.solution.across, &outcome.solution.down).await?;

    let date = document::today_in_chicago();
    let doc = document::assemble(template, &outcome.solution, &clue_set, outcome.tier, author, date)?;

    Ok(doc)
}

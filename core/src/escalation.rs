//! Escalation controller: retries `solve` across dictionary tiers.

use crate::error::CoreError;
use crate::index::LetterIndex;
use crate::solution::Solution;
use crate::solver::{solve, SolveOutcome, SolverConfig};
use crate::template::Template;
use std::collections::HashMap;

/// Controls how many tiers are tried and how many attempts each gets.
#[derive(Debug, Clone)]
pub struct EscalationConfig {
    /// Tiers tried in order; the controller never widens beyond this list.
    pub tier_order: Vec<u8>,
    pub attempts_per_tier: HashMap<u8, u32>,
    pub solver: SolverConfig,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            tier_order: vec![0, 1],
            attempts_per_tier: HashMap::from([(0, 5), (1, 5)]),
            solver: SolverConfig::default(),
        }
    }
}

/// A successful generation, tagged with the tier that produced it.
pub struct EscalationOutcome {
    pub solution: Solution,
    pub tier: u8,
    /// 1-based attempt number within `tier` that succeeded.
    pub tier_attempt: u32,
}

/// Run `solve` under each configured tier, retrying with an advancing seed,
/// until a solution is found or every tier is exhausted.
pub fn run(
    template: &Template,
    tiers: &HashMap<u8, LetterIndex>,
    config: &EscalationConfig,
) -> Result<EscalationOutcome, CoreError> {
    for &tier in &config.tier_order {
        let Some(index) = tiers.get(&tier) else {
            log::warn!("no dictionary provided for tier {tier}, skipping");
            continue;
        };
        let attempts = config.attempts_per_tier.get(&tier).copied().unwrap_or(5);

        for attempt in 0..attempts {
            let mut solver_config = config.solver.clone();
            solver_config.seed = config.solver.seed.wrapping_add(u64::from(tier) * 1_000_000 + u64::from(attempt));

            match solve(template, index, &solver_config) {
                Ok(SolveOutcome::Solution(solution)) => {
                    log::info!(
                        "solved '{}' at tier {tier}, attempt {} ({} attempts, {} backtracks)",
                        template.id,
                        attempt + 1,
                        solution.attempts,
                        solution.backtracks
                    );
                    return Ok(EscalationOutcome { solution, tier, tier_attempt: attempt + 1 });
                }
                Ok(SolveOutcome::Failure { reason, attempts, backtracks, .. }) => {
                    log::debug!(
                        "tier {tier} attempt {} failed: {reason} ({attempts} attempts, {backtracks} backtracks)",
                        attempt + 1
                    );
                }
                Err(CoreError::EmptyDictionary(length)) => {
                    log::warn!("tier {tier} has no words of length {length}, skipping remaining attempts");
                    break;
                }
                Err(other) => return Err(other),
            }
        }
    }

    Err(CoreError::GridGenerationFailed)
}

//! Backtracking solver: the constraint-satisfaction core of the generator.

use crate::error::CoreError;
use crate::grid::{Cell, Grid};
use crate::index::LetterIndex;
use crate::slot::{extract_slots, Slot};
use crate::solution::Solution;
use crate::template::Template;
use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Why a `solve` call did not produce a solution. All three are retryable by
/// an escalation controller; none of them indicate a malformed template or
/// dictionary (those are [`CoreError`]s, returned before search even starts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveFailure {
    Timeout,
    MaxAttempts,
    Exhausted,
}

impl std::fmt::Display for SolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveFailure::Timeout => "TIMEOUT",
            SolveFailure::MaxAttempts => "MAX_ATTEMPTS",
            SolveFailure::Exhausted => "EXHAUSTED",
        };
        f.write_str(s)
    }
}

/// The outcome of one `solve` invocation.
pub enum SolveOutcome {
    Solution(Solution),
    Failure { reason: SolveFailure, attempts: u64, backtracks: u64, elapsed: Duration },
}

/// Tunable search parameters. All fields are plain data, per the design note
/// that configuration should never be implicit global state.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_attempts: u64,
    pub timeout: Duration,
    pub max_candidates: usize,
    pub letter_weights: HashMap<char, u32>,
    pub seed: u64,
    /// Whether placements are pruned via one-step lookahead on intersecting
    /// slots. Exposed mainly to measure its effect; leave `true` in practice.
    pub forward_checking: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 500_000,
            timeout: Duration::from_secs(60),
            max_candidates: 5_000,
            letter_weights: default_letter_weights(),
            // Seeded externally for reproducible tests; otherwise left to vary per run.
            seed: rand::random(),
            forward_checking: true,
        }
    }
}

/// The canonical letter-frequency weighting used to order candidates.
pub fn default_letter_weights() -> HashMap<char, u32> {
    const TABLE: [(char, u32); 26] = [
        ('E', 12), ('T', 9), ('A', 8), ('O', 7), ('I', 7), ('N', 6), ('S', 6), ('H', 5),
        ('R', 5), ('D', 4), ('L', 4), ('C', 3), ('U', 3), ('M', 3), ('W', 2), ('F', 2),
        ('G', 2), ('Y', 2), ('P', 2), ('B', 2), ('V', 1), ('K', 1), ('J', 1), ('X', 1),
        ('Q', 1), ('Z', 1),
    ];
    TABLE.into_iter().collect()
}

struct SearchState<'a> {
    slots: &'a [Slot],
    /// Slot ids in most-constrained-first search order.
    order: Vec<usize>,
    index: &'a LetterIndex,
    config: &'a SolverConfig,
    grid: Grid,
    used: HashSet<String>,
    /// Word currently placed in each slot, keyed by slot id.
    placed: Vec<Option<String>>,
    attempts: u64,
    backtracks: u64,
    start: Instant,
    rng: StdRng,
}

/// Run the backtracking search for one template/dictionary pair. Returns a
/// [`CoreError`] only for the fatal, non-retryable conditions (bad template,
/// no words of a needed length); everything else is reported as a
/// [`SolveOutcome`].
pub fn solve(
    template: &Template,
    index: &LetterIndex,
    config: &SolverConfig,
) -> Result<SolveOutcome, CoreError> {
    let slots = extract_slots(template)?;

    let mut needed_lengths: Vec<usize> = slots.iter().map(Slot::length).collect();
    needed_lengths.sort_unstable();
    needed_lengths.dedup();
    for length in needed_lengths {
        if !index.has_words_of_length(length) {
            return Err(CoreError::EmptyDictionary(length));
        }
    }

    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by(|&a, &b| {
        let (sa, sb) = (&slots[a], &slots[b]);
        sb.intersections.len().cmp(&sa.intersections.len()).then(sb.length().cmp(&sa.length()))
    });

    let mut state = SearchState {
        placed: vec![None; slots.len()],
        slots: &slots,
        order,
        index,
        config,
        grid: Grid::from_template(template),
        used: HashSet::new(),
        attempts: 0,
        backtracks: 0,
        start: Instant::now(),
        rng: StdRng::seed_from_u64(config.seed),
    };

    let outcome = match backtrack(&mut state, 0) {
        Ok(true) => SolveOutcome::Solution(build_solution(&state)),
        Ok(false) => SolveOutcome::Failure {
            reason: SolveFailure::Exhausted,
            attempts: state.attempts,
            backtracks: state.backtracks,
            elapsed: state.start.elapsed(),
        },
        Err(reason) => SolveOutcome::Failure {
            reason,
            attempts: state.attempts,
            backtracks: state.backtracks,
            elapsed: state.start.elapsed(),
        },
    };
    Ok(outcome)
}

/// `Ok(true)`: solved. `Ok(false)`: this subtree is exhausted, backtrack
/// further up. `Err`: hard stop (budget breach), unwind immediately.
fn backtrack(state: &mut SearchState, i: usize) -> Result<bool, SolveFailure> {
    state.attempts += 1;
    if state.attempts > state.config.max_attempts {
        return Err(SolveFailure::MaxAttempts);
    }
    if state.start.elapsed() >= state.config.timeout {
        return Err(SolveFailure::Timeout);
    }
    if i == state.order.len() {
        return Ok(true);
    }

    let slot_id = state.order[i];
    let length = state.slots[slot_id].length();
    let pattern = current_pattern(&state.grid, &state.slots[slot_id]);
    let mut candidates = candidates_excluding_used(state.index, length, &pattern, &state.used);
    order_candidates(&mut candidates, &state.config.letter_weights, &mut state.rng);
    candidates.truncate(state.config.max_candidates);

    for word in candidates {
        let newly_written = place(&mut state.grid, &state.slots[slot_id], &word);
        state.used.insert(word.clone());
        state.placed[slot_id] = Some(word.clone());

        let passes_forward_check = if state.config.forward_checking { forward_check(state, slot_id)? } else { true };
        let solved = if passes_forward_check { backtrack(state, i + 1)? } else { false };

        if solved {
            return Ok(true);
        }

        for (row, col) in newly_written {
            state.grid.clear(row, col);
        }
        state.used.remove(&word);
        state.placed[slot_id] = None;
        state.backtracks += 1;
    }

    Ok(false)
}

/// Forward check: every not-yet-filled slot intersecting `slot_id` must keep
/// at least one candidate once `slot_id`'s word is on the grid.
fn forward_check(state: &SearchState, slot_id: usize) -> Result<bool, SolveFailure> {
    for inter in &state.slots[slot_id].intersections {
        if state.placed[inter.other_slot].is_some() {
            continue;
        }
        if state.start.elapsed() >= state.config.timeout {
            return Err(SolveFailure::Timeout);
        }
        let other = &state.slots[inter.other_slot];
        let pattern = current_pattern(&state.grid, other);
        let candidates = candidates_excluding_used(state.index, other.length(), &pattern, &state.used);
        if candidates.is_empty() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The slot's current letters read off the grid, `None` for still-empty cells.
fn current_pattern(grid: &Grid, slot: &Slot) -> Vec<Option<char>> {
    slot.positions.iter().map(|&(r, c)| grid.get(r, c).letter()).collect()
}

/// Write `word` into `slot`'s cells, skipping cells an earlier slot already
/// filled (the shared letter is guaranteed consistent by the pattern match).
/// Returns the cells this call actually wrote, for clean backtracking.
fn place(grid: &mut Grid, slot: &Slot, word: &str) -> Vec<(usize, usize)> {
    let letters: Vec<char> = word.chars().collect();
    let mut newly_written = Vec::new();
    for (offset, &(row, col)) in slot.positions.iter().enumerate() {
        if grid.get(row, col) == Cell::Empty {
            grid.set(row, col, letters[offset]);
            newly_written.push((row, col));
        }
    }
    newly_written
}

/// Candidate words of `length` matching `pattern` at its fixed positions,
/// with already-used words removed.
fn candidates_excluding_used(
    index: &LetterIndex,
    length: usize,
    pattern: &[Option<char>],
    used: &HashSet<String>,
) -> Vec<String> {
    let mask = candidate_mask(index, length, pattern);
    let words = index.words(length);
    mask.iter_ones().map(|id| &words[id]).filter(|w| !used.contains(*w)).cloned().collect()
}

/// Bitset of word ids of `length` consistent with every fixed position of `pattern`.
fn candidate_mask(index: &LetterIndex, length: usize, pattern: &[Option<char>]) -> BitVec {
    let mut mask: Option<BitVec> = None;
    for (position, letter) in pattern.iter().enumerate() {
        let Some(letter) = letter else { continue };
        match index.bucket(length, position, *letter) {
            Some(bucket) => {
                mask = Some(match mask {
                    Some(mut acc) => {
                        acc &= bucket;
                        acc
                    }
                    None => bucket.clone(),
                });
            }
            None => return bitvec![0; index.words(length).len()],
        }
    }
    mask.unwrap_or_else(|| index.all_mask(length))
}

/// Order candidates by crossability score (average letter weight + seeded
/// jitter), descending. Deterministic for a fixed seed and candidate set.
fn order_candidates(candidates: &mut [String], weights: &HashMap<char, u32>, rng: &mut StdRng) {
    let scored: Vec<(f64, String)> = candidates
        .iter()
        .map(|word| {
            let total: u32 = word.chars().map(|c| *weights.get(&c).unwrap_or(&0)).sum();
            let average = total as f64 / word.len() as f64;
            let jitter: f64 = rng.gen_range(0.0..2.0);
            (average + jitter, word.clone())
        })
        .collect();
    let mut scored = scored;
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    for (slot, (_, word)) in candidates.iter_mut().zip(scored.into_iter()) {
        *slot = word;
    }
}

fn build_solution(state: &SearchState) -> Solution {
    let mut across = std::collections::BTreeMap::new();
    let mut down = std::collections::BTreeMap::new();
    for slot in state.slots {
        let word = state.placed[slot.id].clone().expect("solved grid must have every slot filled");
        match slot.direction {
            crate::direction::Direction::Across => {
                across.insert(slot.number, word);
            }
            crate::direction::Direction::Down => {
                down.insert(slot.number, word);
            }
        }
    }
    Solution {
        grid: state.grid.clone(),
        across,
        down,
        attempts: state.attempts,
        backtracks: state.backtracks,
        elapsed: state.start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template;
    use std::collections::HashMap as Map;

    fn toy_dictionary() -> Map<usize, Vec<String>> {
        let mut map = Map::new();
        map.insert(
            3,
            vec![
                "APE", "ARE", "BAT", "CAT", "EAR", "EAT", "OAR", "PEA", "RAT", "TAR", "TEA",
                "ERA", "APT", "ATE", "OAT", "PAR", "RAP", "TAP",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        );
        map.insert(
            5,
            vec![
                "STARE", "RATES", "TEARS", "ARSON", "EARTH", "TEASE", "OATEN", "PASTE", "TAPER",
                "PATER", "EATER", "RATER", "TASER", "RASTA", "TATER", "RATTY", "PATTY", "APTER",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        );
        map
    }

    fn config_with_seed(seed: u64) -> SolverConfig {
        SolverConfig { seed, ..SolverConfig::default() }
    }

    #[test]
    fn tuesday_toy_dictionary_solves() {
        let template = template::lookup("tuesday").unwrap();
        let index = LetterIndex::build(&toy_dictionary());
        let config = config_with_seed(42);
        let outcome = solve(template, &index, &config).unwrap();
        match outcome {
            SolveOutcome::Solution(solution) => {
                assert!(solution.grid.is_complete());
                let mut words: Vec<&String> = solution.across.values().chain(solution.down.values()).collect();
                words.sort();
                let unique: HashSet<&String> = words.iter().copied().collect();
                assert_eq!(words.len(), unique.len(), "words must be pairwise distinct");
            }
            SolveOutcome::Failure { reason, .. } => panic!("expected a solution, got {reason}"),
        }
    }

    #[test]
    fn only_aaaaa_cannot_fill_saturday() {
        let template = template::lookup("saturday").unwrap();
        let mut map = Map::new();
        map.insert(5, vec!["AAAAA".to_string()]);
        let index = LetterIndex::build(&map);
        let config = SolverConfig {
            max_attempts: 10_000,
            timeout: Duration::from_secs(5),
            ..config_with_seed(7)
        };
        let outcome = solve(template, &index, &config).unwrap();
        match outcome {
            SolveOutcome::Solution(_) => panic!("AAAAA cannot consistently fill every row and column"),
            SolveOutcome::Failure { reason, .. } => assert_eq!(reason, SolveFailure::Exhausted),
        }
    }

    #[test]
    fn empty_dictionary_length_is_a_core_error() {
        let template = template::lookup("tuesday").unwrap();
        let mut map = toy_dictionary();
        map.remove(&3);
        let index = LetterIndex::build(&map);
        let err = solve(template, &index, &config_with_seed(1)).unwrap_err();
        assert_eq!(err, CoreError::EmptyDictionary(3));
    }

    #[test]
    fn same_seed_is_fully_deterministic() {
        let template = template::lookup("tuesday").unwrap();
        let index = LetterIndex::build(&toy_dictionary());
        let config = config_with_seed(99);
        let first = solve(template, &index, &config).unwrap();
        let second = solve(template, &index, &config).unwrap();
        match (first, second) {
            (SolveOutcome::Solution(a), SolveOutcome::Solution(b)) => {
                assert_eq!(a.grid, b.grid);
                assert_eq!(a.attempts, b.attempts);
                assert_eq!(a.backtracks, b.backtracks);
            }
            _ => panic!("expected both runs to solve identically"),
        }
    }

    /// A deterministic ~5,000-word length-5 dictionary over a common-letter
    /// alphabet, sparsified by a fixed checksum so that most partial grid
    /// assignments remain only locally plausible, not globally consistent —
    /// the regime forward checking is meant to prune.
    fn synthetic_five_letter_dictionary(target: usize) -> Vec<String> {
        const ALPHABET: [char; 8] = ['A', 'E', 'I', 'O', 'R', 'S', 'T', 'N'];
        let mut words = Vec::new();
        for (i0, a) in ALPHABET.iter().enumerate() {
            for (i1, b) in ALPHABET.iter().enumerate() {
                for (i2, c) in ALPHABET.iter().enumerate() {
                    for (i3, d) in ALPHABET.iter().enumerate() {
                        for (i4, e) in ALPHABET.iter().enumerate() {
                            if (i0 + 2 * i1 + 3 * i2 + 5 * i3 + 7 * i4) % 6 != 0 {
                                continue;
                            }
                            words.push([*a, *b, *c, *d, *e].iter().collect());
                            if words.len() >= target {
                                return words;
                            }
                        }
                    }
                }
            }
        }
        words
    }

    #[test]
    fn forward_checking_cuts_backtracks_by_at_least_10x() {
        let template = template::lookup("saturday").unwrap();
        let mut map = Map::new();
        map.insert(5, synthetic_five_letter_dictionary(5_000));
        let index = LetterIndex::build(&map);

        let base = SolverConfig {
            max_attempts: 200_000,
            timeout: Duration::from_secs(20),
            ..config_with_seed(11)
        };
        let with_fc = SolverConfig { forward_checking: true, ..base.clone() };
        let without_fc = SolverConfig { forward_checking: false, ..base };

        let backtracks_of = |outcome: SolveOutcome| match outcome {
            SolveOutcome::Solution(s) => s.backtracks,
            SolveOutcome::Failure { backtracks, .. } => backtracks,
        };

        let backtracks_with_fc = backtracks_of(solve(template, &index, &with_fc).unwrap());
        let backtracks_without_fc = backtracks_of(solve(template, &index, &without_fc).unwrap());

        let ratio_holds = if backtracks_with_fc == 0 {
            backtracks_without_fc >= 10
        } else {
            backtracks_without_fc >= backtracks_with_fc * 10
        };
        assert!(
            ratio_holds,
            "forward checking should cut backtracks by at least 10x: with={backtracks_with_fc}, without={backtracks_without_fc}"
        );
    }

    #[test]
    fn budget_honesty_on_tiny_max_attempts() {
        let template = template::lookup("saturday").unwrap();
        let index = LetterIndex::build(&toy_dictionary());
        let config = SolverConfig { max_attempts: 3, ..config_with_seed(5) };
        let outcome = solve(template, &index, &config).unwrap();
        match outcome {
            SolveOutcome::Solution(s) => assert!(s.attempts <= config.max_attempts),
            SolveOutcome::Failure { reason: SolveFailure::MaxAttempts, attempts, .. } => {
                assert!(attempts >= config.max_attempts)
            }
            SolveOutcome::Failure { reason, .. } => panic!("unexpected failure reason {reason}"),
        }
    }
}

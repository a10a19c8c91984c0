//! Partitioning the raw frequency list into dictionary tiers.

use crate::source::RawWordFile;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Tier cutoffs and length bounds for partitioning the raw word file.
/// Plain data, following the `SolverConfig`/`EscalationConfig` convention.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub tier0_cutoff: usize,
    pub tier1_cutoff: usize,
    pub length_range: RangeInclusive<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self { tier0_cutoff: 5_000, tier1_cutoff: 10_000, length_range: 3..=5 }
    }
}

/// Length-keyed word lists for tier 0 (strict, most frequent words) and
/// tier 1 (the full escalation dictionary), ready to feed
/// `pentacross_core::LetterIndex::build`.
pub struct Tiers {
    pub tier0: HashMap<usize, Vec<String>>,
    pub tier1: HashMap<usize, Vec<String>>,
}

fn is_playable(word: &str, config: &DictionaryConfig) -> bool {
    config.length_range.contains(&word.len()) && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn bucket_by_length(words: impl Iterator<Item = String>, config: &DictionaryConfig) -> HashMap<usize, Vec<String>> {
    let mut buckets: HashMap<usize, Vec<String>> = HashMap::new();
    for word in words.filter(|w| is_playable(w, config)) {
        buckets.entry(word.len()).or_default().push(word.to_uppercase());
    }
    buckets
}

impl RawWordFile {
    /// Split the frequency-ordered file into tier 0 and tier 1 per `config`,
    /// keeping only in-range a-z tokens and upper-casing the survivors.
    pub fn into_tiers(self, config: &DictionaryConfig) -> Tiers {
        let lines = self.into_lines();
        let tier0_lines = lines.iter().take(config.tier0_cutoff).cloned();
        let tier1_lines = lines.iter().take(config.tier1_cutoff).cloned();

        Tiers { tier0: bucket_by_length(tier0_lines, config), tier1: bucket_by_length(tier1_lines, config) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawWordFile;

    #[test]
    fn filters_length_and_non_alphabetic_tokens() {
        let file = RawWordFile::from_text_for_test("cat\nabcdefgh\nco-op\nbird\nhi\nEAR\n");
        let tiers = file.into_tiers(&DictionaryConfig::default());
        let mut words = tiers.tier0.get(&3).cloned().unwrap_or_default();
        words.sort();
        assert_eq!(words, vec!["CAT".to_string()]);
        assert!(tiers.tier0.get(&4).unwrap().contains(&"BIRD".to_string()));
    }

    #[test]
    fn tier0_is_a_prefix_of_tier1() {
        let lines: Vec<String> = (0..12_000).map(|i| format!("cat{}", i % 10)).collect();
        let file = RawWordFile::from_text_for_test(&lines.join("\n"));
        let tiers = file.into_tiers(&DictionaryConfig::default());
        let tier0_words = tiers.tier0.get(&4).map(Vec::len).unwrap_or(0);
        let tier1_words = tiers.tier1.get(&4).map(Vec::len).unwrap_or(0);
        assert!(tier1_words >= tier0_words);
    }

    #[test]
    fn custom_cutoffs_are_honored() {
        let lines: Vec<String> = (0..20).map(|i| format!("cat{}", i % 10)).collect();
        let file = RawWordFile::from_text_for_test(&lines.join("\n"));
        let config = DictionaryConfig { tier0_cutoff: 5, tier1_cutoff: 10, length_range: 3..=5 };
        let tiers = file.into_tiers(&config);
        let total: usize = tiers.tier0.values().map(Vec::len).sum();
        assert_eq!(total, 5);
    }
}

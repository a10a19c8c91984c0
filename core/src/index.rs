//! Letter index: `length -> position -> letter -> set of words`.
//!
//! Each bucket is a bitset over a flat, length-specific word table, so that
//! intersecting the buckets for several fixed positions of a pattern is a
//! handful of AND instructions rather than a set-intersection over strings.

use bitvec::prelude::*;
use std::collections::HashMap;

pub struct LetterIndex {
    /// length -> flat word table; a word's position in this vec is its id.
    tables: HashMap<usize, Vec<String>>,
    /// (length, position, letter) -> bitset over `tables[length]`.
    buckets: HashMap<(usize, usize, char), BitVec>,
}

impl LetterIndex {
    /// Build the index from a length-keyed mapping of already upper-cased words.
    pub fn build(words_by_length: &HashMap<usize, Vec<String>>) -> Self {
        let mut tables: HashMap<usize, Vec<String>> = HashMap::new();
        let mut buckets: HashMap<(usize, usize, char), BitVec> = HashMap::new();

        for (&length, words) in words_by_length {
            let table = tables.entry(length).or_default();
            for word in words {
                if word.len() != length {
                    continue;
                }
                table.push(word.clone());
            }
        }

        for (&length, table) in &tables {
            for position in 0..length {
                for letter in b'A'..=b'Z' {
                    let letter = letter as char;
                    let bits: BitVec = table
                        .iter()
                        .map(|w| w.as_bytes()[position] as char == letter)
                        .collect();
                    if bits.any() {
                        buckets.insert((length, position, letter), bits);
                    }
                }
            }
        }

        Self { tables, buckets }
    }

    /// The flat word table for a given length (word id == index into this slice).
    pub fn words(&self, length: usize) -> &[String] {
        self.tables.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bitset of words of `length` with `letter` at `position`, if any exist.
    pub fn bucket(&self, length: usize, position: usize, letter: char) -> Option<&BitVec> {
        self.buckets.get(&(length, position, letter))
    }

    /// All-ones mask sized to the word table for `length` (the unconstrained candidate set).
    pub fn all_mask(&self, length: usize) -> BitVec {
        bitvec![1; self.words(length).len()]
    }

    pub fn has_words_of_length(&self, length: usize) -> bool {
        self.tables.get(&length).is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<usize, Vec<String>> {
        let mut map = HashMap::new();
        map.insert(3, vec!["CAT".to_string(), "CAR".to_string(), "BAT".to_string()]);
        map
    }

    #[test]
    fn bucket_matches_expected_words() {
        let index = LetterIndex::build(&sample());
        let bucket = index.bucket(3, 0, 'C').unwrap();
        let words = index.words(3);
        let matched: Vec<&str> = bucket.iter_ones().map(|id| words[id].as_str()).collect();
        assert_eq!(matched, vec!["CAT", "CAR"]);
    }

    #[test]
    fn missing_bucket_is_none() {
        let index = LetterIndex::build(&sample());
        assert!(index.bucket(3, 0, 'Z').is_none());
    }

    #[test]
    fn intersecting_two_positions_narrows_to_one_word() {
        let index = LetterIndex::build(&sample());
        let mut mask = index.bucket(3, 0, 'C').unwrap().clone();
        mask &= index.bucket(3, 2, 'R').unwrap();
        let words = index.words(3);
        let matched: Vec<&str> = mask.iter_ones().map(|id| words[id].as_str()).collect();
        assert_eq!(matched, vec!["CAR"]);
    }

    #[test]
    fn all_mask_has_one_bit_per_word() {
        let index = LetterIndex::build(&sample());
        assert_eq!(index.all_mask(3).len(), 3);
        assert_eq!(index.all_mask(4).len(), 0);
    }
}

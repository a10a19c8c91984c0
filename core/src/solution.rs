//! The output of a single successful `solve` call.

use crate::grid::Grid;
use std::collections::BTreeMap;
use std::time::Duration;

/// A completed grid plus the word placed in every slot, keyed by clue number.
#[derive(Debug, Clone)]
pub struct Solution {
    pub grid: Grid,
    pub across: BTreeMap<u32, String>,
    pub down: BTreeMap<u32, String>,
    pub attempts: u64,
    pub backtracks: u64,
    pub elapsed: Duration,
}

impl Solution {
    /// Every word placed in the grid, across then down, in clue-number order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.across.values().chain(self.down.values()).map(String::as_str)
    }
}

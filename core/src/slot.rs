//! Slot extraction: turns a [`Template`] into the ordered list of word slots.

use crate::direction::Direction;
use crate::error::CoreError;
use crate::template::{Template, SIZE};

/// A coordinate in the grid, shared with a crossing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    /// Index (into the flat slot array) of the slot this one crosses.
    pub other_slot: usize,
    /// Offset into `self.positions` of the shared cell.
    pub my_offset: usize,
    /// Offset into the other slot's `positions` of the shared cell.
    pub their_offset: usize,
}

/// A maximal run of playable cells in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Index into the flat slot array this extractor returns.
    pub id: usize,
    /// Clue number, dense starting at 1, reading-order.
    pub number: u32,
    pub direction: Direction,
    pub positions: Vec<(usize, usize)>,
    pub intersections: Vec<Intersection>,
}

impl Slot {
    pub fn length(&self) -> usize {
        self.positions.len()
    }
}

/// Extract the ordered slot list (in clue-number order) with intersections
/// computed, per the slot extractor algorithm.
pub fn extract_slots(template: &Template) -> Result<Vec<Slot>, CoreError> {
    let playable = |row: usize, col: usize| template.cell(row, col).is_playable();

    // Step 1: reading-order scan, numbering every cell that starts an across
    // or down run.
    struct Start {
        row: usize,
        col: usize,
        across: bool,
        down: bool,
    }
    let mut starts = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            if !playable(row, col) {
                continue;
            }
            let starts_across =
                (col == 0 || !playable(row, col - 1)) && col + 1 < SIZE && playable(row, col + 1);
            let starts_down =
                (row == 0 || !playable(row - 1, col)) && row + 1 < SIZE && playable(row + 1, col);
            if starts_across || starts_down {
                starts.push(Start { row, col, across: starts_across, down: starts_down });
            }
        }
    }

    // Step 2: assign clue numbers, then build each slot by extending to the
    // next block/edge.
    let mut slots = Vec::new();
    for (number, start) in starts.iter().enumerate() {
        let number = (number + 1) as u32;
        if start.across {
            let positions = extend(start.row, start.col, Direction::Across, &playable);
            if positions.len() < 2 {
                return Err(CoreError::InvalidTemplate(template.id.to_string()));
            }
            slots.push(Slot { id: 0, number, direction: Direction::Across, positions, intersections: Vec::new() });
        }
        if start.down {
            let positions = extend(start.row, start.col, Direction::Down, &playable);
            if positions.len() < 2 {
                return Err(CoreError::InvalidTemplate(template.id.to_string()));
            }
            slots.push(Slot { id: 0, number, direction: Direction::Down, positions, intersections: Vec::new() });
        }
    }

    // Assign flat ids now that the final order is fixed.
    for (id, slot) in slots.iter_mut().enumerate() {
        slot.id = id;
    }

    // Step 3: pairwise intersections between opposite-direction slots.
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            if slots[i].direction == slots[j].direction {
                continue;
            }
            let shared = slots[i]
                .positions
                .iter()
                .enumerate()
                .find_map(|(my_offset, pos)| {
                    slots[j].positions.iter().position(|p| p == pos).map(|their_offset| (my_offset, their_offset))
                });
            if let Some((my_offset, their_offset)) = shared {
                slots[i].intersections.push(Intersection { other_slot: j, my_offset, their_offset });
                slots[j].intersections.push(Intersection { other_slot: i, my_offset: their_offset, their_offset: my_offset });
            }
        }
    }

    Ok(slots)
}

fn extend(
    start_row: usize,
    start_col: usize,
    direction: Direction,
    playable: &impl Fn(usize, usize) -> bool,
) -> Vec<(usize, usize)> {
    let (dr, dc) = direction.delta();
    let mut positions = Vec::new();
    let (mut row, mut col) = (start_row as i32, start_col as i32);
    while row >= 0 && col >= 0 && (row as usize) < SIZE && (col as usize) < SIZE && playable(row as usize, col as usize) {
        positions.push((row as usize, col as usize));
        row += dr;
        col += dc;
    }
    positions
}

//! Assembling the final puzzle document from a solved grid and its clues.

use chrono::Utc;
use chrono_tz::America::Chicago;
use pentacross_clues::ClueSet;
use pentacross_core::{extract_slots, CoreError, Solution, Template};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct Meta {
    pub date: String,
    pub author: String,
    pub difficulty: String,
    pub theme: String,
    pub template: String,
    pub tier: u8,
}

#[derive(Debug, Serialize)]
pub struct GridCell {
    pub char: char,
    #[serde(skip_serializing_if = "Option::is_none", rename = "clueIndex")]
    pub clue_index: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct Clues {
    pub across: BTreeMap<String, String>,
    pub down: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct Document {
    pub meta: Meta,
    pub dimensions: (usize, usize),
    pub grid: BTreeMap<String, GridCell>,
    pub clues: Clues,
}

/// Today's date in the America/Chicago timezone, `YYYY-MM-DD`.
pub fn today_in_chicago() -> String {
    Utc::now().with_timezone(&Chicago).format("%Y-%m-%d").to_string()
}

pub fn assemble(
    template: &Template,
    solution: &Solution,
    clues: &ClueSet,
    tier: u8,
    author: &str,
    date: String,
) -> Result<Document, CoreError> {
    let slots = extract_slots(template)?;
    let letters = solution.grid.letters();

    let mut grid = BTreeMap::new();
    for (row, row_letters) in letters.iter().enumerate() {
        for (col, letter) in row_letters.iter().enumerate() {
            let Some(ch) = letter else { continue };
            let clue_index =
                slots.iter().find(|slot| slot.positions.first() == Some(&(row, col))).map(|slot| slot.number);
            grid.insert(format!("{row},{col}"), GridCell { char: *ch, clue_index });
        }
    }

    let placeholder = |word: &str| format!("{}-letter word: {}", word.len(), word);
    let across = solution
        .across
        .iter()
        .map(|(n, word)| (n.to_string(), clues.across.get(n).cloned().unwrap_or_else(|| placeholder(word))))
        .collect();
    let down = solution
        .down
        .iter()
        .map(|(n, word)| (n.to_string(), clues.down.get(n).cloned().unwrap_or_else(|| placeholder(word))))
        .collect();

    Ok(Document {
        meta: Meta {
            date,
            author: author.to_string(),
            difficulty: clues.difficulty.clone(),
            theme: clues.theme.clone(),
            template: template.id.to_string(),
            tier,
        },
        dimensions: (5, 5),
        grid,
        clues: Clues { across, down },
    })
}

//! Template catalog: the seven weekday 5x5 block layouts.

use serde::{Deserialize, Serialize};

/// Width and height of every template; the solver only ever targets 5x5 grids.
pub const SIZE: usize = 5;

/// A single cell of a [`Template`]: either a block or a playable letter cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateCell {
    Block,
    Playable,
}

impl TemplateCell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(TemplateCell::Block),
            '.' => Some(TemplateCell::Playable),
            _ => None,
        }
    }

    pub fn is_playable(self) -> bool {
        matches!(self, TemplateCell::Playable)
    }
}

/// A named 5x5 block pattern. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    cells: [[TemplateCell; SIZE]; SIZE],
}

impl Template {
    fn parse(id: &'static str, rows: [&str; SIZE]) -> Self {
        let mut cells = [[TemplateCell::Playable; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            assert_eq!(chars.len(), SIZE, "template '{id}' row {r} is not {SIZE} wide");
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r][c] =
                    TemplateCell::from_char(ch).unwrap_or_else(|| panic!("template '{id}' has invalid cell '{ch}'"));
            }
        }
        Self { id, cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> TemplateCell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TemplateCell; SIZE]> {
        self.cells.iter()
    }
}

/// Look up a template by weekday identifier (case-insensitive), e.g. `"tuesday"`.
pub fn lookup(id: &str) -> Option<&'static Template> {
    catalog().iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// The seven curated templates, one per weekday. The block patterns are not
/// required to be symmetric (symmetric placement is an explicit non-goal).
pub fn catalog() -> &'static [Template; 7] {
    use std::sync::OnceLock;
    static CATALOG: OnceLock<[Template; 7]> = OnceLock::new();
    CATALOG.get_or_init(|| {
        [
            Template::parse(
                "monday",
                [".....", ".....", ".....", ".....", "....."],
            ),
            Template::parse(
                "tuesday",
                ["#...#", ".....", ".....", ".....", "#...#"],
            ),
            Template::parse(
                "wednesday",
                ["..#..", "..#..", ".....", "..#..", "..#.."],
            ),
            Template::parse(
                "thursday",
                ["#....", "#....", ".....", "....#", "....#"],
            ),
            Template::parse(
                "friday",
                [".#...", ".#...", ".....", "...#.", "...#."],
            ),
            Template::parse(
                "saturday",
                [".....", ".....", ".....", ".....", "....."],
            ),
            Template::parse(
                "sunday",
                ["..#..", ".....", "#...#", ".....", "..#.."],
            ),
        ]
    })
}

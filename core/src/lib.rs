//! The grid-filling constraint solver for 5x5 mini crosswords: template
//! catalog, slot extraction, letter index, backtracking solver, and the
//! tier-escalation controller that drives it. No I/O, no randomness beyond
//! an explicitly injected seed.

pub mod direction;
pub mod error;
pub mod escalation;
pub mod grid;
pub mod index;
pub mod slot;
pub mod solution;
pub mod solver;
pub mod template;

pub use direction::Direction;
pub use error::CoreError;
pub use escalation::{run as run_escalation, EscalationConfig, EscalationOutcome};
pub use grid::{Cell, Grid};
pub use index::LetterIndex;
pub use slot::{extract_slots, Intersection, Slot};
pub use solution::Solution;
pub use solver::{default_letter_weights, solve, SolveFailure, SolveOutcome, SolverConfig};
pub use template::{Template, TemplateCell};

//! Core Towers of Hanoi logic: disk columns, the move rule, the puzzle state
//! and the per-turn column selection machine.

mod column;
mod rules;
mod selection;
mod state;

pub use column::{Column, Disk, COLUMN_COUNT};
pub use rules::{is_legal, Move};
pub use selection::{Selection, SelectionOutcome, SelectionState};
pub use state::{minimum_moves, PuzzleState, MAX_DEGREE, TARGET_COLUMN};

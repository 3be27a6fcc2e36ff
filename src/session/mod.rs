//! Game drivers and the contracts they need from a front end.
//!
//! A driver owns the control flow of one game. It asks an [`InputSource`]
//! for key events, hands every state change to a [`Display`] and, while
//! animating the solver, waits on a [`Pause`]. The terminal front end in
//! [`crate::ui`] implements all three. Tests use a scripted fake.

mod auto;
mod interactive;
#[cfg(test)]
pub(crate) mod testing;

pub use auto::auto_solve;
pub use interactive::{next_turn, play, Turn};

use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use crate::game::{PuzzleState, Selection};
use crate::input::InputEvent;

/// Shown when the player picks a move that breaks the size rule.
pub const ILLEGAL_MOVE_NOTICE: &str = "This is an illegal move.";

/// Blocking source of classified key events.
pub trait InputSource {
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Something that can show the puzzle.
pub trait Display {
    /// Draw the current puzzle.
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()>;

    /// Draw the puzzle with a message and block until it is acknowledged.
    fn notice(&mut self, view: &BoardView<'_>, message: &str) -> io::Result<()>;
}

/// Waits between animated moves.
pub trait Pause {
    /// Block for `duration`. `Break` asks the driver to stop early.
    fn pause(&mut self, duration: Duration) -> io::Result<ControlFlow<()>>;
}

/// Everything a display needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub puzzle: &'a PuzzleState,
    /// Highlighted column, absent while the solver is playing
    pub cursor: Option<usize>,
    /// Source column waiting for a destination
    pub armed: Option<usize>,
}

impl<'a> BoardView<'a> {
    /// View for a player choosing a move
    pub fn selecting(puzzle: &'a PuzzleState, selection: &Selection) -> Self {
        BoardView {
            puzzle,
            cursor: Some(selection.cursor()),
            armed: selection.armed(),
        }
    }

    /// View with no selection, used by the solver and the final screen
    pub fn watching(puzzle: &'a PuzzleState) -> Self {
        BoardView {
            puzzle,
            cursor: None,
            armed: None,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Solved { moves: u64, minimum: u64 },
    Abandoned { moves: u64 },
}

impl SessionOutcome {
    fn of(puzzle: &PuzzleState) -> Self {
        if puzzle.is_solved() {
            SessionOutcome::Solved {
                moves: puzzle.move_count(),
                minimum: puzzle.minimum_moves(),
            }
        } else {
            SessionOutcome::Abandoned {
                moves: puzzle.move_count(),
            }
        }
    }
}

fn solved_message(puzzle: &PuzzleState) -> String {
    format!(
        "Solved in {} moves (minimum {}).",
        puzzle.move_count(),
        puzzle.minimum_moves()
    )
}

use super::column::COLUMN_COUNT;
use super::rules::Move;
use super::state::PuzzleState;
use crate::input::InputEvent;

/// Whether a source column has been picked for the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Armed(usize),
}

/// Result of feeding one event to a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing to act on yet
    Pending,
    /// A legal move was chosen
    Move(Move),
    /// The chosen move breaks the size rule and was discarded
    Illegal(Move),
}

/// Column cursor plus the armed source column for a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cursor: usize,
    state: SelectionState,
}

impl Selection {
    /// Start of a turn: nothing armed, cursor on the first column
    pub fn new() -> Self {
        Selection {
            cursor: 0,
            state: SelectionState::Idle,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The armed source column, if any
    pub fn armed(&self) -> Option<usize> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Armed(column) => Some(column),
        }
    }

    /// Advance the state machine by one event.
    ///
    /// A completed selection, legal or not, puts the machine back at the
    /// start of a turn.
    pub fn handle(&mut self, event: InputEvent, puzzle: &PuzzleState) -> SelectionOutcome {
        match event {
            InputEvent::MoveLeft => {
                self.cursor = (self.cursor + COLUMN_COUNT - 1) % COLUMN_COUNT;
                SelectionOutcome::Pending
            }
            InputEvent::MoveRight => {
                self.cursor = (self.cursor + 1) % COLUMN_COUNT;
                SelectionOutcome::Pending
            }
            InputEvent::Confirm => self.confirm(puzzle),
            _ => SelectionOutcome::Pending,
        }
    }

    fn confirm(&mut self, puzzle: &PuzzleState) -> SelectionOutcome {
        match self.state {
            SelectionState::Idle => {
                self.state = SelectionState::Armed(self.cursor);
                SelectionOutcome::Pending
            }
            SelectionState::Armed(source) if source == self.cursor => {
                self.state = SelectionState::Idle;
                SelectionOutcome::Pending
            }
            SelectionState::Armed(source) => {
                let mv = Move::new(source, self.cursor);
                *self = Selection::new();
                if puzzle.is_legal(mv) {
                    SelectionOutcome::Move(mv)
                } else {
                    tracing::debug!(%mv, "illegal move rejected");
                    SelectionOutcome::Illegal(mv)
                }
            }
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

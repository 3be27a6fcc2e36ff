use std::io;

use super::{solved_message, BoardView, Display, InputSource, SessionOutcome, ILLEGAL_MOVE_NOTICE};
use crate::error::SessionError;
use crate::game::{Move, PuzzleState, Selection, SelectionOutcome};
use crate::input::InputEvent;

/// What the player decided on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Move(Move),
    Restart,
    Quit,
}

/// Run the column selection for one turn.
///
/// Each turn starts with a fresh [`Selection`]. Illegal picks are shown as a
/// notice and the player tries again, so only legal moves are returned.
pub fn next_turn<U>(puzzle: &PuzzleState, ui: &mut U) -> io::Result<Turn>
where
    U: InputSource + Display,
{
    let mut selection = Selection::new();

    loop {
        ui.render(&BoardView::selecting(puzzle, &selection))?;

        match ui.next_event()? {
            InputEvent::Quit => return Ok(Turn::Quit),
            InputEvent::Restart => return Ok(Turn::Restart),
            event => match selection.handle(event, puzzle) {
                SelectionOutcome::Pending => {}
                SelectionOutcome::Move(mv) => return Ok(Turn::Move(mv)),
                SelectionOutcome::Illegal(_) => {
                    ui.notice(&BoardView::selecting(puzzle, &selection), ILLEGAL_MOVE_NOTICE)?;
                }
            },
        }
    }
}

/// Play until the puzzle is solved or the player quits.
pub fn play<U>(puzzle: &mut PuzzleState, ui: &mut U) -> Result<SessionOutcome, SessionError>
where
    U: InputSource + Display,
{
    tracing::info!(degree = puzzle.degree(), "interactive game started");

    while !puzzle.is_solved() {
        match next_turn(puzzle, ui)? {
            Turn::Move(mv) => puzzle.apply_move(mv)?,
            Turn::Restart => puzzle.reset(),
            Turn::Quit => {
                tracing::info!(moves = puzzle.move_count(), "game abandoned");
                return Ok(SessionOutcome::of(puzzle));
            }
        }
    }

    ui.notice(&BoardView::watching(puzzle), &solved_message(puzzle))?;
    Ok(SessionOutcome::of(puzzle))
}

use std::time::Duration;

use super::{solved_message, BoardView, Display, Pause, SessionOutcome};
use crate::error::SessionError;
use crate::game::{PuzzleState, TARGET_COLUMN};
use crate::solver;

/// Reset the puzzle and animate the minimal solution, pausing `delay`
/// between moves. The front end may stop the animation during any pause.
pub fn auto_solve<U>(
    puzzle: &mut PuzzleState,
    ui: &mut U,
    delay: Duration,
) -> Result<SessionOutcome, SessionError>
where
    U: Display + Pause,
{
    puzzle.reset();
    let moves = solver::solve(puzzle.degree(), 0, TARGET_COLUMN)?;
    tracing::info!(
        degree = puzzle.degree(),
        moves = moves.len(),
        delay_ms = delay.as_millis() as u64,
        "auto-solve started"
    );

    ui.render(&BoardView::watching(puzzle))?;
    for mv in moves {
        if ui.pause(delay)?.is_break() {
            tracing::info!(moves = puzzle.move_count(), "auto-solve interrupted");
            return Ok(SessionOutcome::of(puzzle));
        }
        puzzle.apply_move(mv)?;
        ui.render(&BoardView::watching(puzzle))?;
    }

    ui.notice(&BoardView::watching(puzzle), &solved_message(puzzle))?;
    Ok(SessionOutcome::of(puzzle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;
    use crate::session::testing::ScriptedUi;

    #[test]
    fn test_auto_solve_runs_to_completion() {
        let mut puzzle = PuzzleState::new(4).unwrap();
        let mut ui = ScriptedUi::default();
        let delay = Duration::from_millis(250);

        let outcome = auto_solve(&mut puzzle, &mut ui, delay).unwrap();

        assert_eq!(outcome, SessionOutcome::Solved { moves: 15, minimum: 15 });
        assert!(puzzle.is_solved());
        assert_eq!(ui.pauses, vec![delay; 15]);
        // Initial frame plus one per move
        assert_eq!(ui.renders, 16);
        assert!(ui.frames.iter().all(|&frame| frame == (None, None)));
        assert_eq!(ui.notices, vec!["Solved in 15 moves (minimum 15).".to_string()]);
    }

    #[test]
    fn test_auto_solve_restarts_from_initial_arrangement() {
        let mut puzzle = PuzzleState::new(3).unwrap();
        puzzle.apply_move(Move::new(0, 1)).unwrap();
        let mut ui = ScriptedUi::default();

        let outcome = auto_solve(&mut puzzle, &mut ui, Duration::ZERO).unwrap();
        assert_eq!(outcome, SessionOutcome::Solved { moves: 7, minimum: 7 });
    }

    #[test]
    fn test_auto_solve_can_be_interrupted() {
        let mut puzzle = PuzzleState::new(3).unwrap();
        let mut ui = ScriptedUi {
            stop_at_pause: Some(2),
            ..Default::default()
        };

        let outcome = auto_solve(&mut puzzle, &mut ui, Duration::ZERO).unwrap();
        assert_eq!(outcome, SessionOutcome::Abandoned { moves: 2 });
        assert!(ui.notices.is_empty());
    }
}

//! Recursive solver producing the minimal move sequence.
//!
//! The whole sequence is built up front. It is cheap next to the pause
//! between animated moves, so callers can simply walk the list.

use crate::error::SolveError;
use crate::game::{minimum_moves, Move, COLUMN_COUNT};

/// Largest degree the solver will materialise (about 16 million moves).
pub const MAX_SOLVE_DEGREE: u32 = 24;

/// Moves that transfer a tower of `degree` disks from `from` to `to`,
/// using the remaining column as scratch space.
///
/// A degree of 0 yields no moves.
pub fn solve(degree: u32, from: usize, to: usize) -> Result<Vec<Move>, SolveError> {
    for column in [from, to] {
        if column >= COLUMN_COUNT {
            return Err(SolveError::InvalidColumn(column));
        }
    }
    if from == to {
        return Err(SolveError::SameColumn(from));
    }
    if degree > MAX_SOLVE_DEGREE {
        return Err(SolveError::DegreeTooLarge {
            degree,
            max: MAX_SOLVE_DEGREE,
        });
    }

    let mut moves = Vec::with_capacity(minimum_moves(degree) as usize);
    solve_into(degree, from, to, &mut moves);
    tracing::debug!(degree, from, to, moves = moves.len(), "solution generated");
    Ok(moves)
}

fn solve_into(degree: u32, from: usize, to: usize, moves: &mut Vec<Move>) {
    if degree == 0 {
        return;
    }
    let spare = spare_column(from, to);
    solve_into(degree - 1, from, spare, moves);
    moves.push(Move::new(from, to));
    solve_into(degree - 1, spare, to, moves);
}

/// The column that is neither `from` nor `to`.
fn spare_column(from: usize, to: usize) -> usize {
    // Column indices 0, 1, 2 sum to 3
    COLUMN_COUNT - from - to
}

use super::column::{Column, Disk, COLUMN_COUNT};
use super::rules::{self, Move};
use crate::error::{MoveError, PuzzleError};

/// Largest supported degree; `2^degree - 1` must fit in a `u64`.
pub const MAX_DEGREE: u32 = 63;

/// Column that must hold the whole tower for the puzzle to be solved.
pub const TARGET_COLUMN: usize = 2;

/// Minimum number of moves needed to solve a puzzle of `degree` disks.
pub fn minimum_moves(degree: u32) -> u64 {
    debug_assert!(degree <= MAX_DEGREE);
    (1u64 << degree) - 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    degree: u32,
    columns: [Column; COLUMN_COUNT],
    move_count: u64,
    minimum_moves: u64,
}

impl PuzzleState {
    /// Create a puzzle with all `degree` disks stacked on column 0
    pub fn new(degree: u32) -> Result<Self, PuzzleError> {
        check_degree(degree)?;
        tracing::info!(degree, "new puzzle");

        Ok(PuzzleState {
            degree,
            columns: [Column::tower(degree), Column::new(), Column::new()],
            move_count: 0,
            minimum_moves: minimum_moves(degree),
        })
    }

    /// Create a puzzle from explicit column contents, each listed bottom to
    /// top. Every size in `1..=degree` must appear exactly once and each
    /// column must shrink towards the top.
    pub fn from_columns(
        degree: u32,
        columns: [Vec<u32>; COLUMN_COUNT],
    ) -> Result<Self, PuzzleError> {
        check_degree(degree)?;

        let mut seen = vec![false; degree as usize];
        let mut built: [Column; COLUMN_COUNT] = Default::default();

        for (index, sizes) in columns.iter().enumerate() {
            for &size in sizes {
                let disk = Disk::new(size)
                    .filter(|_| size <= degree)
                    .ok_or_else(|| {
                        PuzzleError::InvalidArrangement(format!(
                            "disk size {size} is outside 1..={degree}"
                        ))
                    })?;
                let slot = &mut seen[(size - 1) as usize];
                if *slot {
                    return Err(PuzzleError::InvalidArrangement(format!(
                        "disk {size} appears more than once"
                    )));
                }
                *slot = true;
                built[index].push(disk);
            }
            if !built[index].is_ordered() {
                return Err(PuzzleError::InvalidArrangement(format!(
                    "column {} is not ordered largest to smallest",
                    index + 1
                )));
            }
        }

        if let Some(missing) = seen.iter().position(|&present| !present) {
            return Err(PuzzleError::InvalidArrangement(format!(
                "disk {} is missing",
                missing + 1
            )));
        }

        Ok(PuzzleState {
            degree,
            columns: built,
            move_count: 0,
            minimum_moves: minimum_moves(degree),
        })
    }

    /// Put every disk back on column 0 and zero the move counter
    pub fn reset(&mut self) {
        self.columns = [Column::tower(self.degree), Column::new(), Column::new()];
        self.move_count = 0;
        tracing::info!(degree = self.degree, "puzzle reset");
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    /// Top disk of a column, or `None` if it is empty or does not exist
    pub fn peek(&self, column: usize) -> Option<Disk> {
        self.columns.get(column).and_then(Column::peek)
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn minimum_moves(&self) -> u64 {
        self.minimum_moves
    }

    /// Check whether a move may be played right now
    pub fn is_legal(&self, mv: Move) -> bool {
        rules::is_legal(&self.columns, mv)
    }

    /// Check if the whole tower sits on the target column
    pub fn is_solved(&self) -> bool {
        self.columns[TARGET_COLUMN].len() == self.degree as usize
    }

    /// Move the top disk of `mv.source` onto `mv.dest`.
    ///
    /// All preconditions are checked before anything changes, so an error
    /// leaves the puzzle untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        for column in [mv.source, mv.dest] {
            if column >= COLUMN_COUNT {
                return Err(MoveError::InvalidColumn(column));
            }
        }
        if mv.source == mv.dest {
            return Err(MoveError::SameColumn(mv.source));
        }

        let moving = self.columns[mv.source]
            .peek()
            .ok_or(MoveError::EmptySource(mv.source))?;
        if let Some(target) = self.columns[mv.dest].peek() {
            if moving >= target {
                return Err(MoveError::Illegal {
                    moving: moving.size(),
                    target: target.size(),
                });
            }
        }

        if let Some(disk) = self.columns[mv.source].pop() {
            self.columns[mv.dest].push(disk);
        }
        self.move_count += 1;

        tracing::debug!(
            %mv,
            disk = moving.size(),
            move_count = self.move_count,
            "move applied"
        );
        if self.is_solved() {
            tracing::info!(
                move_count = self.move_count,
                minimum = self.minimum_moves,
                "puzzle solved"
            );
        }

        Ok(())
    }
}

fn check_degree(degree: u32) -> Result<(), PuzzleError> {
    if degree == 0 {
        return Err(PuzzleError::InvalidDegree(degree));
    }
    if degree > MAX_DEGREE {
        return Err(PuzzleError::DegreeTooLarge {
            degree,
            max: MAX_DEGREE,
        });
    }
    Ok(())
}

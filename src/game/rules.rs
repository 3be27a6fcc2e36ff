use std::fmt;

use super::column::{Column, COLUMN_COUNT};

/// A transfer of the top disk of `source` onto `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: usize,
    pub dest: usize,
}

impl Move {
    pub fn new(source: usize, dest: usize) -> Self {
        Move { source, dest }
    }
}

impl fmt::Display for Move {
    /// Columns are shown 1-based, matching the on-screen labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source + 1, self.dest + 1)
    }
}

/// Check whether `mv` may be played on `columns`.
///
/// The moving disk must exist and be strictly smaller than the disk it
/// lands on. An empty destination accepts any disk. Equal sizes never
/// coexist in a valid puzzle, but they are rejected all the same.
pub fn is_legal(columns: &[Column; COLUMN_COUNT], mv: Move) -> bool {
    let (Some(source), Some(dest)) = (columns.get(mv.source), columns.get(mv.dest)) else {
        return false;
    };
    if mv.source == mv.dest {
        return false;
    }

    let Some(moving) = source.peek() else {
        return false;
    };

    match dest.peek() {
        None => true,
        Some(target) => moving < target,
    }
}

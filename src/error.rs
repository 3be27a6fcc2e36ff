use std::path::PathBuf;

/// Errors that can occur when constructing a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("degree must be at least 1 (got {0})")]
    InvalidDegree(u32),

    #[error("degree {degree} is too large (max {max})")]
    DegreeTooLarge { degree: u32, max: u32 },

    #[error("invalid column arrangement: {0}")]
    InvalidArrangement(String),
}

/// Contract violations when applying a move. The interaction layer only
/// ever emits legal moves, so these indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("source and destination are both column {0}")]
    SameColumn(usize),

    #[error("column {0} is empty")]
    EmptySource(usize),

    #[error("cannot move disk {moving} onto disk {target}")]
    Illegal { moving: u32, target: u32 },
}

/// Errors that can occur when generating a solution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("cannot solve from column {0} onto itself")]
    SameColumn(usize),

    #[error("degree {degree} is too large to solve (max {max})")]
    DegreeTooLarge { degree: u32, max: u32 },
}

/// Errors that can end a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("move error: {0}")]
    Move(#[from] MoveError),

    #[error("solver error: {0}")]
    Solve(#[from] SolveError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("menu has no selectable options")]
    NoSelectableOptions,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_error_display() {
        let err = PuzzleError::InvalidDegree(0);
        assert_eq!(err.to_string(), "degree must be at least 1 (got 0)");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Illegal {
            moving: 3,
            target: 1,
        };
        assert_eq!(err.to_string(), "cannot move disk 3 onto disk 1");
    }

    #[test]
    fn test_session_error_wraps_move_error() {
        let err: SessionError = MoveError::EmptySource(1).into();
        assert_eq!(err.to_string(), "move error: column 1 is empty");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.degree must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.degree must be >= 1"
        );
    }
}

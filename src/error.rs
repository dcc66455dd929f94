use crate::matrix::Pos;
use std::fmt;

/// Errors returned by the maze builder, the solver and the text decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The builder was asked for a maze with a zero dimension.
    InvalidSize { width: usize, height: usize },
    /// The matrix is not rectangular, or does not have exactly two boundary openings.
    MalformedMaze(String),
    /// Every cell reachable from the entrance was visited without reaching the exit.
    NoRouteFound { entrance: Pos, exit: Pos },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidSize { width, height } => {
                write!(f, "invalid maze size {width}x{height}; both dimensions must be at least 1")
            }
            MazeError::MalformedMaze(reason) => write!(f, "malformed maze: {reason}"),
            MazeError::NoRouteFound { entrance, exit } => {
                write!(f, "no route from entrance {entrance} to exit {exit}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

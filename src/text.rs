//! line-oriented text encoding of a [MazeMatrix].
//!
//! Every cell is drawn as two characters, so that the maze looks roughly
//! square in a terminal:
//!
//! | cell            | text              |
//! |-----------------|-------------------|
//! | [Cell::Wall]    | `██` (`U+2588` twice) |
//! | [Cell::Open]    | two spaces        |
//! | [Cell::Route]   | `//`              |
//!
//! Decoding only distinguishes walls from everything else, so a route drawn
//! into the text comes back as open cells.
//!
//! ```
//! use maze_runner::{text, Cell, Pos};
//!
//! let maze = text::decode("██████\n    ██\n██████\n").unwrap();
//! assert_eq!((maze.rows(), maze.cols()), (3, 3));
//! assert_eq!(maze[Pos::new(1, 1)], Cell::Open);
//! assert_eq!(text::encode(&maze), "██████\n    ██\n██████\n");
//! ```

use crate::{
    matrix::{Cell, MazeMatrix},
    MazeError, Result,
};
use std::{fmt, str::FromStr};

/// Full block, drawn twice per wall cell.
pub const WALL_GLYPH: char = '\u{2588}';
pub const OPEN_GLYPH: char = ' ';
pub const ROUTE_GLYPH: char = '/';

#[inline]
fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Wall => WALL_GLYPH,
        Cell::Open => OPEN_GLYPH,
        Cell::Route => ROUTE_GLYPH,
    }
}

/// Encode `maze` as text, one line per row, each line ending with `\n`.
///
/// Same as `maze.to_string()`.
#[inline]
pub fn encode(maze: &MazeMatrix) -> String {
    maze.to_string()
}

/// Decode text produced by [encode] back into a matrix.
///
/// Blank lines, including lines of nothing but whitespace, are skipped.
/// In every other line, the character at each even offset decides a cell:
/// [Cell::Wall] if it is [WALL_GLYPH], [Cell::Open] otherwise.
/// A line of `n` characters holds `n / 2` cells, rounded up.
///
/// Returns [MazeError::MalformedMaze] if no rows are found, or if the rows
/// don't all hold the same number of cells.
pub fn decode(text: &str) -> Result<MazeMatrix> {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .step_by(2)
                .map(|c| if c == WALL_GLYPH { Cell::Wall } else { Cell::Open })
                .collect()
        })
        .collect();

    if rows.is_empty() {
        return Err(MazeError::MalformedMaze("no maze rows in text".into()));
    }

    MazeMatrix::from_rows(&rows)
}

impl fmt::Display for MazeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                let c = glyph(cell);
                write!(f, "{c}{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for MazeMatrix {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::build_maze_from_seed, matrix::Pos, solver::solve};

    #[test]
    fn test_encode() {
        let mut maze = MazeMatrix::walls(2, 3);
        maze.set(Pos::new(1, 0), Cell::Open);
        maze.set(Pos::new(1, 1), Cell::Route);

        assert_eq!(encode(&maze), "██████\n  //██\n");
        assert_eq!(maze.to_string(), encode(&maze));
    }

    #[test]
    fn test_round_trip() {
        let maze = build_maze_from_seed(17, 10, [3; 32]).unwrap();
        assert_eq!(decode(&encode(&maze)).unwrap(), maze);

        // routes decode as open cells
        let mut solved = maze.clone();
        solve(&mut solved).unwrap();
        assert_ne!(solved, maze);
        assert_eq!(encode(&solved).parse::<MazeMatrix>().unwrap(), maze);
    }

    #[test]
    fn test_decode_lenient() {
        // blank lines around and between rows, and CRLF line endings
        let maze = decode("\n██  ██\r\n\n  \u{2588}\u{2588}//\n   \n").unwrap();
        assert_eq!((maze.rows(), maze.cols()), (2, 3));
        assert_eq!(maze[Pos::new(0, 1)], Cell::Open);
        assert_eq!(maze[Pos::new(1, 0)], Cell::Open);
        assert_eq!(maze[Pos::new(1, 1)], Cell::Wall);
        assert_eq!(maze[Pos::new(1, 2)], Cell::Open);

        // odd length lines round up
        let maze = decode("█").unwrap();
        assert_eq!((maze.rows(), maze.cols()), (1, 1));
        assert_eq!(maze[Pos::new(0, 0)], Cell::Wall);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode(""), Err(MazeError::MalformedMaze(_))));
        assert!(matches!(decode("\n  \n"), Err(MazeError::MalformedMaze(_))));
        assert!(matches!(
            decode("██████\n████\n"),
            Err(MazeError::MalformedMaze(_))
        ));
    }
}

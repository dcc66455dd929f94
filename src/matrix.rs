//! wall/path matrix that a maze is rendered into.
//!
//! A [MazeMatrix] is a rectangular, row-major grid of [Cell]s.
//! The builder fills it with [Cell::Wall] and [Cell::Open] cells,
//! and the solver paints the escape route over it with [Cell::Route].

use crate::{MazeError, Result};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// State of a single matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Wall,
    Open,
    /// An open cell that lies on the escape route.
    Route,
}

impl Cell {
    /// Walls block movement; open and route cells don't.
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Row and column of a cell in a [MazeMatrix].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A `rows × cols` matrix of [Cell]s.
#[derive(Clone, PartialEq, Eq)]
pub struct MazeMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl MazeMatrix {
    /// Create a matrix with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Self {
        MazeMatrix {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Create a matrix that is nothing but walls.
    #[inline]
    pub fn walls(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, Cell::Wall)
    }

    /// Build a matrix from its rows.
    ///
    /// Returns [MazeError::MalformedMaze] if there are no rows, the rows are empty,
    /// or the rows are not all the same length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MazeError::MalformedMaze("maze has no rows".into()));
        };

        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MazeError::MalformedMaze("maze has no columns".into()));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MazeError::MalformedMaze(format!(
                    "row {i} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(MazeMatrix {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Return the cell at `pos`, or `None` if it is outside the matrix.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Set the cell at `pos`.
    ///
    /// Panics if `pos` is outside the matrix.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self[pos] = cell;
    }

    /// Flat, row-major index of `pos`.
    #[inline]
    pub fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "Invalid pos {pos}");
        pos.row * self.cols + pos.col
    }

    /// Inverse of [index_of](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.cols, index % self.cols)
    }

    /// Iterate over the rows of the matrix, top to bottom.
    #[inline]
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterate over all cells with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.pos_of(i), cell))
    }

    /// Count the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Index<Pos> for MazeMatrix {
    type Output = Cell;

    #[inline]
    fn index(&self, pos: Pos) -> &Cell {
        assert!(self.contains(pos), "Invalid pos {pos}");
        &self.cells[pos.row * self.cols + pos.col]
    }
}

impl IndexMut<Pos> for MazeMatrix {
    #[inline]
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        assert!(self.contains(pos), "Invalid pos {pos}");
        &mut self.cells[pos.row * self.cols + pos.col]
    }
}

impl fmt::Debug for MazeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MazeMatrix({}x{})", self.rows, self.cols)?;
        for row in self.iter_rows() {
            for cell in row {
                let c = match cell {
                    Cell::Wall => '#',
                    Cell::Open => '.',
                    Cell::Route => '*',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        use Cell::*;

        let m = MazeMatrix::from_rows(&[[Wall, Open, Wall], [Open, Open, Wall]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[Pos::new(0, 1)], Open);
        assert_eq!(m[Pos::new(1, 2)], Wall);
        assert_eq!(m.get(Pos::new(2, 0)), None);
        assert_eq!(m.count(Open), 3);

        let ragged: Vec<Vec<Cell>> = vec![vec![Wall, Wall], vec![Wall]];
        assert!(matches!(
            MazeMatrix::from_rows(&ragged),
            Err(MazeError::MalformedMaze(_))
        ));

        let empty: Vec<Vec<Cell>> = vec![];
        assert!(MazeMatrix::from_rows(&empty).is_err());
        assert!(MazeMatrix::from_rows(&[Vec::<Cell>::new()]).is_err());
    }

    #[test]
    fn test_positions() {
        let mut m = MazeMatrix::walls(4, 5);
        let pos = Pos::new(2, 3);
        assert_eq!(m.pos_of(m.index_of(pos)), pos);

        m.set(pos, Cell::Route);
        assert_eq!(m.get(pos), Some(Cell::Route));
        assert_eq!(m.iter().find(|(_, c)| *c == Cell::Route), Some((pos, Cell::Route)));

        assert_eq!(m.iter_rows().count(), 4);
    }
}

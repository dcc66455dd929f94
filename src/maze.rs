//! contains functions to build a maze.
//!
//! A maze of `width × height` cells is carved out of a solid [MazeMatrix]:
//! the coarse [TiedGrid] nodes become rooms at odd coordinates, and each edge
//! of the grid's random [spanning tree](crate::prim::spanning_tree) opens the
//! wall cell between its two rooms.
//! The entrance is always at `(1, 0)` on the left edge, and the exit is cut
//! through the right edge next to the lowest room in the last room column.
//!
//! ```
//! use maze_runner::{maze::build_maze_from_seed, Cell, Pos};
//!
//! let maze = build_maze_from_seed(5, 5, [7; 32]).unwrap();
//!
//! assert_eq!(maze.rows(), 5);
//! assert_eq!(maze.cols(), 5);
//! assert_eq!(maze[Pos::new(1, 0)], Cell::Open);
//! assert_eq!(maze[Pos::new(0, 0)], Cell::Wall);
//! assert_eq!(maze.count(Cell::Open), 9);
//! ```

use crate::{
    grid::{coarse_len, TiedGrid},
    matrix::{Cell, MazeMatrix, Pos},
    prim::{spanning_tree, SpanningTree},
    MazeError, Result,
};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Builds a maze of the given width and height.
///
/// Uses [StdRng] seeded from the operating system.
pub fn build_maze(width: usize, height: usize) -> Result<MazeMatrix> {
    build_maze_with_rng(width, height, &mut StdRng::from_entropy())
}

/// Given width and height, build a maze with the provided seed.
///
/// Uses [StdRng] with the provided seed.
pub fn build_maze_from_seed(width: usize, height: usize, seed: [u8; 32]) -> Result<MazeMatrix> {
    build_maze_with_rng(width, height, &mut StdRng::from_seed(seed))
}

/// Given width and height, build a maze with the provided Rng.
///
/// Returns a `height × width` matrix of [Cell::Wall] and [Cell::Open] cells,
/// or [MazeError::InvalidSize] if either dimension is zero.
///
/// Mazes narrower or shorter than 3 cells have no room for a node,
/// so they come out without an exit.
pub fn build_maze_with_rng<R: RngCore>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<MazeMatrix> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidSize { width, height });
    }

    let grid = TiedGrid::with_rng(coarse_len(width), coarse_len(height), rng);
    let tree = spanning_tree(&grid);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        width,
        height,
        nodes = grid.nodes_len(),
        tree_edges = tree.len(),
        "building maze"
    );

    let mut maze = carve(&grid, &tree, height, width);
    open_entrance(&mut maze);
    open_exit(&mut maze);

    Ok(maze)
}

/// Matrix position of the room for the node at `(col, row)`.
#[inline]
fn room(col: usize, row: usize) -> Pos {
    Pos::new(row * 2 + 1, col * 2 + 1)
}

/// Render `tree` into a `rows × cols` matrix of walls.
fn carve(grid: &TiedGrid, tree: &SpanningTree, rows: usize, cols: usize) -> MazeMatrix {
    let mut maze = MazeMatrix::walls(rows, cols);

    // every node is part of the tree, even a lone one without edges
    for node in 0..grid.nodes_len() {
        let (col, row) = grid.pos(node);
        maze.set(room(col, row), Cell::Open);
    }

    for edge in tree.iter(grid) {
        let (c1, r1) = grid.pos(edge.a);
        let (c2, r2) = grid.pos(edge.b);

        let corridor = if c1 == c2 {
            Pos::new(r1.max(r2) * 2, c1 * 2 + 1)
        } else {
            Pos::new(r1 * 2 + 1, c1.max(c2) * 2)
        };
        maze.set(corridor, Cell::Open);
    }

    maze
}

fn open_entrance(maze: &mut MazeMatrix) {
    let entrance = Pos::new(1, 0);
    if maze.contains(entrance) {
        maze.set(entrance, Cell::Open);
    }
}

/// Cut the exit through the right edge.
///
/// Going up from the bottom, the first row with an open cell in the last room
/// column gets every cell to its right opened: one cell for odd widths, two
/// for even widths, where the room column is followed by two wall columns.
fn open_exit(maze: &mut MazeMatrix) {
    let cols = maze.cols();
    let gap = if cols % 2 == 1 { 1 } else { 2 };
    let Some(room_col) = cols.checked_sub(gap + 1) else {
        return;
    };

    let Some(row) = (1..maze.rows())
        .rev()
        .find(|&row| maze[Pos::new(row, room_col)] == Cell::Open)
    else {
        return;
    };

    for col in room_col + 1..cols {
        maze.set(Pos::new(row, col), Cell::Open);
    }
}

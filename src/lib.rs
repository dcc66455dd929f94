//! Perfect maze generation over a grid graph, and escape route finding.
//!
//! A maze is carved from the random [minimum spanning tree](prim) of a
//! [grid graph](grid) whose edge weights are drawn at random, so there is
//! exactly one path between any two open cells.
//! The [solver] finds the two openings in the outer wall and the route between them.
//!
//! See [maze] and [solver] modules for more information.
//!
//! # Examples
//!
//! ```
//! use maze_runner::{build_maze_from_seed, solve, Cell, Pos};
//!
//! let mut maze = build_maze_from_seed(11, 11, [42; 32]).unwrap();
//! let route = solve(&mut maze).unwrap();
//!
//! assert_eq!(route.entrance(), Some(Pos::new(1, 0)));
//! assert_eq!(maze.count(Cell::Route), route.len());
//!
//! print!("{maze}");
//! ```

mod error;

pub mod bitvec;
pub mod grid;
pub mod matrix;
pub mod maze;
pub mod prim;
pub mod solver;
pub mod text;

pub use error::MazeError;
pub use matrix::{Cell, MazeMatrix, Pos};
pub use maze::{build_maze, build_maze_from_seed, build_maze_with_rng};
pub use solver::{clear_route, find_openings, solve, Route};

/// Result type of this crate, defaulting to [MazeError].
pub type Result<T, E = MazeError> = std::result::Result<T, E>;

/// Given two node IDs, return a tuple of the two IDs in ascending order.
#[inline]
pub fn edge_id<T: Ord>(node_a_index: T, node_b_index: T) -> (T, T) {
    if node_a_index > node_b_index {
        (node_b_index, node_a_index)
    } else {
        (node_a_index, node_b_index)
    }
}

//! finds the escape route through a [MazeMatrix].
//!
//! The solver doesn't need the spanning tree a maze was built from; it works
//! on any rectangular matrix, including ones decoded from text.
//! It looks for the two openings in the outer wall, runs a depth-first search
//! from the first one to the second, and paints the path it found with
//! [Cell::Route].
//!
//! In a perfect maze there is exactly one simple path between the openings,
//! so the search can only wander into dead ends before finding it, never
//! return a different route.

use crate::{
    matrix::{Cell, MazeMatrix, Pos},
    MazeError, Result,
};

/// Neighbor order of the search: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cells of an escape route, from the entrance to the exit (both included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Pos>,
}

impl Route {
    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Number of cells on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn entrance(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn exit(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Locate the entrance and the exit of `maze`.
///
/// Boundary cells are scanned row by row down the left and right columns
/// (left before right), then column by column along the top and bottom rows
/// (top before bottom). The first non-wall cell found is the entrance and the
/// second is the exit.
///
/// Returns [MazeError::MalformedMaze] unless there are exactly two openings.
pub fn find_openings(maze: &MazeMatrix) -> Result<(Pos, Pos)> {
    let (rows, cols) = (maze.rows(), maze.cols());
    if rows == 0 || cols == 0 {
        return Err(MazeError::MalformedMaze("maze is empty".into()));
    }

    let sides = (0..rows).flat_map(|row| [Pos::new(row, 0), Pos::new(row, cols - 1)]);
    let ends = (0..cols).flat_map(|col| [Pos::new(0, col), Pos::new(rows - 1, col)]);

    let mut openings: Vec<Pos> = Vec::with_capacity(3);
    for pos in sides.chain(ends) {
        if maze[pos].is_wall() || openings.contains(&pos) {
            continue;
        }

        openings.push(pos);
        if openings.len() > 2 {
            break;
        }
    }

    match openings[..] {
        [entrance, exit] => Ok((entrance, exit)),
        [] => Err(MazeError::MalformedMaze("no openings in the outer wall".into())),
        [_] => Err(MazeError::MalformedMaze("only one opening in the outer wall".into())),
        _ => Err(MazeError::MalformedMaze(
            "more than two openings in the outer wall".into(),
        )),
    }
}

/// Find the route from the entrance of `maze` to its exit,
/// and mark every cell on it as [Cell::Route].
///
/// The search is a depth-first search that tries the neighbors of each cell
/// in the order up, down, left, right, and stops as soon as it steps on the exit.
/// It keeps its own stack, so the size of the maze is not limited by the call stack.
///
/// Cells already marked as [Cell::Route] count as open, so solving a solved
/// maze again gives the same route.
///
/// # Errors
///
/// - [MazeError::MalformedMaze] if the maze doesn't have exactly two openings.
/// - [MazeError::NoRouteFound] if the exit can't be reached from the entrance.
///   `maze` is left untouched in that case.
pub fn solve(maze: &mut MazeMatrix) -> Result<Route> {
    let (entrance, exit) = find_openings(maze).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(%err, "refusing to solve maze");
        err
    })?;

    let start = maze.index_of(entrance);
    let goal = maze.index_of(exit);

    // For each visited cell, the cell it was first reached from.
    // The entrance points at itself.
    let mut came_from: Vec<Option<usize>> = vec![None; maze.rows() * maze.cols()];
    came_from[start] = Some(start);

    // (cell, index of the next direction to try)
    let mut stack = vec![(entrance, 0)];

    while let Some(frame) = stack.last_mut() {
        let Some(&(dr, dc)) = DIRECTIONS.get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        let curr = frame.0;

        let Some(next) = step(maze, curr, dr, dc) else {
            continue;
        };

        let i = maze.index_of(next);
        if maze[next].is_wall() || came_from[i].is_some() {
            continue;
        }

        came_from[i] = Some(maze.index_of(curr));
        if i == goal {
            break;
        }

        stack.push((next, 0));
    }

    if came_from[goal].is_none() {
        #[cfg(feature = "tracing")]
        tracing::warn!(%entrance, %exit, "exit is unreachable");
        return Err(MazeError::NoRouteFound { entrance, exit });
    }

    let mut cells = vec![exit];
    let mut curr = goal;
    while let Some(prev) = came_from[curr].filter(|&prev| prev != curr) {
        cells.push(maze.pos_of(prev));
        curr = prev;
    }
    cells.reverse();

    for &pos in &cells {
        maze.set(pos, Cell::Route);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(%entrance, %exit, len = cells.len(), "escape route found");

    Ok(Route { cells })
}

/// Turn every [Cell::Route] cell back into [Cell::Open].
pub fn clear_route(maze: &mut MazeMatrix) {
    let routes: Vec<Pos> = maze
        .iter()
        .filter(|&(_, cell)| cell == Cell::Route)
        .map(|(pos, _)| pos)
        .collect();

    for pos in routes {
        maze.set(pos, Cell::Open);
    }
}

/// Move one step from `pos`, or `None` when that leaves the matrix.
#[inline]
fn step(maze: &MazeMatrix, pos: Pos, dr: isize, dc: isize) -> Option<Pos> {
    let next = Pos::new(pos.row.checked_add_signed(dr)?, pos.col.checked_add_signed(dc)?);
    maze.contains(next).then_some(next)
}

//! coarse grid graph that a maze is carved from.
//!
//! Each node of a [TiedGrid] becomes a room of the final maze,
//! and each edge a potential corridor between two rooms.
//! Nodes are addressed by flat row-major index, and edges are kept as
//! `(a, b, weight)` triples in a single list.
//!
//! ```sh
//! 0 -- 1 -- 2
//! |    |    |
//! 3 -- 4 -- 5
//! ```

use rand::{Rng, RngCore};

/// Flat index of a node in a [TiedGrid].
pub type NodeId = usize;

/// Number of coarse grid nodes that fit along a maze side of `len` cells.
///
/// Every node takes two cells, plus one for the outer wall.
/// When `len` is even, one node is dropped so the extra column or row
/// can hold a second wall instead.
///
/// ```
/// use maze_runner::grid::coarse_len;
///
/// assert_eq!(coarse_len(5), 2);
/// assert_eq!(coarse_len(8), 3);
/// assert_eq!(coarse_len(1), 0);
/// ```
#[inline]
pub fn coarse_len(len: usize) -> usize {
    if len % 2 == 0 {
        (len / 2).saturating_sub(1)
    } else {
        len / 2
    }
}

/// Undirected weighted edge between two grid-adjacent nodes.
///
/// `a` is always the lower node index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f64,
}

impl GridEdge {
    /// Given one endpoint, return the other.
    #[inline]
    pub fn other(&self, node: NodeId) -> NodeId {
        debug_assert!(node == self.a || node == self.b);
        if node == self.a {
            self.b
        } else {
            self.a
        }
    }
}

/// A `cols × rows` grid where every node is connected to its horizontal and
/// vertical neighbors by a randomly weighted edge.
#[derive(Debug, Clone)]
pub struct TiedGrid {
    cols: usize,
    rows: usize,
    edges: Vec<GridEdge>,
    /// For each node, indices into `edges`.
    incident: Vec<Vec<usize>>,
}

impl TiedGrid {
    /// Create a grid of unconnected nodes.
    pub fn new(cols: usize, rows: usize) -> Self {
        TiedGrid {
            cols,
            rows,
            edges: Vec::new(),
            incident: vec![Vec::with_capacity(4); cols * rows],
        }
    }

    /// Create a grid and tie every pair of adjacent nodes together,
    /// drawing each edge weight uniformly from `[0, 1)`.
    ///
    /// Edges are created node by node in row-major order,
    /// first to the right neighbor and then to the one below.
    pub fn with_rng<R: RngCore>(cols: usize, rows: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(cols, rows);
        grid.edges.reserve(grid.max_edges());

        for row in 0..rows {
            for col in 0..cols {
                let node = grid.node_at(col, row);

                if col + 1 < cols {
                    grid.connect(node, node + 1, rng.gen::<f64>());
                }
                if row + 1 < rows {
                    grid.connect(node, node + cols, rng.gen::<f64>());
                }
            }
        }

        grid
    }

    /// Add an edge between `a` and `b`.
    ///
    /// Does nothing if the two are already connected, or if they are not adjacent.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let (a, b) = crate::edge_id(a, b);
        if !self.adjacent(a, b) || self.neighbors(a).any(|n| n == b) {
            return;
        }

        let index = self.edges.len();
        self.edges.push(GridEdge { a, b, weight });
        self.incident[a].push(index);
        self.incident[b].push(index);
    }

    /// Number of grid columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of grid rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of nodes in this grid.
    #[inline]
    pub fn nodes_len(&self) -> usize {
        self.cols * self.rows
    }

    /// Return the number of edges in this grid.
    #[inline]
    pub fn edges_len(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges a fully tied grid of this size has.
    #[inline]
    pub fn max_edges(&self) -> usize {
        // Each row has cols-1 horizontal edges;
        // each column has rows-1 vertical edges.
        self.rows * self.cols.saturating_sub(1) + self.cols * self.rows.saturating_sub(1)
    }

    #[inline]
    pub fn edges(&self) -> &[GridEdge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, index: usize) -> &GridEdge {
        &self.edges[index]
    }

    /// Indices of the edges touching `node`.
    #[inline]
    pub fn node_edges(&self, node: NodeId) -> &[usize] {
        &self.incident[node]
    }

    /// Nodes connected to `node` by an edge.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident[node]
            .iter()
            .map(move |&e| self.edges[e].other(node))
    }

    /// Return the column and row of `node`.
    #[inline]
    pub fn pos(&self, node: NodeId) -> (usize, usize) {
        assert!(node < self.nodes_len());
        (node % self.cols, node / self.cols)
    }

    /// Return the node at the given column and row.
    #[inline]
    pub fn node_at(&self, col: usize, row: usize) -> NodeId {
        assert!(col < self.cols);
        assert!(row < self.rows);
        row * self.cols + col
    }

    /// Check that `a` and `b` differ by exactly one step along one axis.
    fn adjacent(&self, a: NodeId, b: NodeId) -> bool {
        if a >= self.nodes_len() || b >= self.nodes_len() {
            return false;
        }
        let ((ac, ar), (bc, br)) = (self.pos(a), self.pos(b));
        ac.abs_diff(bc) + ar.abs_diff(br) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_coarse_len() {
        assert_eq!(coarse_len(1), 0);
        assert_eq!(coarse_len(2), 0);
        assert_eq!(coarse_len(3), 1);
        assert_eq!(coarse_len(4), 1);
        assert_eq!(coarse_len(5), 2);
        assert_eq!(coarse_len(8), 3);
        assert_eq!(coarse_len(21), 10);
    }

    #[test]
    fn test_tied_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = TiedGrid::with_rng(7, 4, &mut rng);

        assert_eq!(grid.nodes_len(), 28);
        assert_eq!(grid.edges_len(), 45);
        assert_eq!(grid.edges_len(), grid.max_edges());

        for edge in grid.edges() {
            assert!(edge.a < edge.b);
            assert!((0.0..1.0).contains(&edge.weight));
        }

        let neighbors = |n| {
            let mut v: Vec<_> = grid.neighbors(n).collect();
            v.sort();
            v
        };

        // Corners.
        assert_eq!(neighbors(0), vec![1, 7]);
        assert_eq!(neighbors(6), vec![5, 13]);
        assert_eq!(neighbors(21), vec![14, 22]);
        assert_eq!(neighbors(27), vec![20, 26]);

        // Edges.
        assert_eq!(neighbors(4), vec![3, 5, 11]);
        assert_eq!(neighbors(7), vec![0, 8, 14]);

        // Interior points.
        assert_eq!(neighbors(8), vec![1, 7, 9, 15]);
        assert_eq!(neighbors(17), vec![10, 16, 18, 24]);
    }

    #[test]
    fn test_connect_once() {
        let mut grid = TiedGrid::new(3, 1);
        grid.connect(0, 1, 0.5);
        grid.connect(1, 0, 0.1);
        // not adjacent
        grid.connect(0, 2, 0.1);

        assert_eq!(grid.edges_len(), 1);
        assert_eq!(grid.node_edges(0), &[0]);
        assert_eq!(grid.node_edges(1), &[0]);
        assert!(grid.node_edges(2).is_empty());
        assert_eq!(grid.edge(0).other(1), 0);

        // wrapping across rows is not adjacency
        let mut grid = TiedGrid::new(2, 2);
        grid.connect(1, 2, 0.3);
        assert_eq!(grid.edges_len(), 0);
    }

    #[test]
    fn test_degenerate() {
        let grid = TiedGrid::with_rng(0, 5, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.nodes_len(), 0);
        assert_eq!(grid.edges_len(), 0);

        let grid = TiedGrid::with_rng(1, 1, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.nodes_len(), 1);
        assert_eq!(grid.edges_len(), 0);
        assert_eq!(grid.pos(0), (0, 0));
    }
}

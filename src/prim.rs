//! minimum spanning tree over a [TiedGrid], grown with Prim's algorithm.
//!
//! Because the grid's edge weights are random, the minimum spanning tree is a
//! uniformly shaped random tree, and carving it out of a solid block gives a
//! perfect maze: every room is reachable, and only by a single path.

use crate::{
    bitvec::BitVec,
    grid::{GridEdge, NodeId, TiedGrid},
};
use std::{cmp::Ordering, collections::BinaryHeap};

/// Edges of a spanning tree, as indices into [TiedGrid::edges].
///
/// Edges are listed in the order they joined the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<usize>,
}

impl SpanningTree {
    /// Indices of the tree's edges.
    #[inline]
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Return the number of edges in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolve the tree's edges against the grid they were computed from.
    pub fn iter<'a>(&'a self, grid: &'a TiedGrid) -> impl Iterator<Item = &'a GridEdge> + 'a {
        self.edges.iter().map(move |&e| grid.edge(e))
    }
}

/// An edge leaving the tree, waiting in the queue.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    edge: usize,
    to: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // reversed, so that `BinaryHeap` pops the lightest edge first;
    // equal weights go to the edge created first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

/// Compute the minimum spanning tree of `grid`, starting from node `0`.
///
/// Every step adds the lightest edge that connects a node in the tree to a
/// node outside of it, until every node is in the tree.
/// Candidate edges are kept in a priority queue; edges whose far end has
/// joined the tree in the meantime are skipped when they come up.
///
/// A grid with zero or one node gives an empty tree.
/// If `grid` is not connected, only the component of node `0` is spanned.
pub fn spanning_tree(grid: &TiedGrid) -> SpanningTree {
    let nodes_len = grid.nodes_len();
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(nodes_len.saturating_sub(1)),
    };

    if nodes_len == 0 {
        return tree;
    }

    let mut in_tree = BitVec::with_capacity(nodes_len);
    let mut queue = BinaryHeap::with_capacity(grid.edges_len());

    let push_edges = |queue: &mut BinaryHeap<Candidate>, in_tree: &BitVec, node: NodeId| {
        for &edge in grid.node_edges(node) {
            let to = grid.edge(edge).other(node);
            if !in_tree.get_bit(to) {
                queue.push(Candidate {
                    weight: grid.edge(edge).weight,
                    edge,
                    to,
                });
            }
        }
    };

    in_tree.insert(0);
    push_edges(&mut queue, &in_tree, 0);

    while tree.len() + 1 < nodes_len {
        let Some(candidate) = queue.pop() else {
            break;
        };

        if !in_tree.insert(candidate.to) {
            continue;
        }

        tree.edges.push(candidate.edge);
        push_edges(&mut queue, &in_tree, candidate.to);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nodes = nodes_len,
        spanned = in_tree.count_ones(),
        edges = tree.len(),
        "spanning tree grown"
    );

    tree
}

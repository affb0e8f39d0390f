//! Index-addressed graphs and their traversals.
//!
//! - `unweighted`: the mutable undirected store, [`UnweightedGraph`]
//! - `traversal`: depth-first and breadth-first search
//! - `tree`: the [`SearchTree`] snapshot a traversal returns
//! - `display`: text renderings of a graph, a tree, or a tree path

pub mod display;
pub mod edge;
pub mod traversal;
pub mod tree;
pub mod unweighted;
pub(crate) mod access;
mod invariants;

pub use display::{EdgesDisplay, PathDisplay, TreeDisplay};
pub use edge::Edge;
pub use traversal::{bfs, dfs, dfs_forest};
pub use tree::{SearchTree, TraversalKind};
pub use unweighted::UnweightedGraph;

use crate::error::Result;

/// Read-only neighbor contract that traversals and renderers run against.
///
/// Vertices are addressed by dense index in `[0, len())`.
pub trait Graph {
    /// Vertex payload type.
    type Vertex;

    /// Returns the number of vertices.
    fn len(&self) -> usize;

    /// Returns `true` if there are no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the payload of vertex `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds) if `index >= len()`.
    fn vertex(&self, index: usize) -> Result<&Self::Vertex>;

    /// Returns the targets of `index`'s outgoing arcs, in adjacency order.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds) if `index >= len()`.
    fn neighbors(&self, index: usize) -> Result<&[usize]>;
}

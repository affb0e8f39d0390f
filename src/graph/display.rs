//! Text renderings of graphs and search trees.
//!
//! Each renderer resolves vertex payloads up front from the graph and tree it
//! is given, so a tree whose indices have gone stale is reported as an error
//! at construction instead of a formatting failure.

use core::fmt;

use crate::error::Result;
use crate::graph::tree::SearchTree;
use crate::graph::Graph;

/// Every vertex followed by its outgoing arcs.
///
/// ```text
/// A (0): (A, B)
/// B (1): (B, A) (B, C)
/// ```
pub struct EdgesDisplay<'g, V> {
    rows: Vec<(&'g V, Vec<&'g V>)>,
}

impl<'g, V> EdgesDisplay<'g, V> {
    /// Resolves every vertex of `graph` and the targets of its arcs.
    ///
    /// # Errors
    /// Any error `graph` reports for an index in `[0, len())` or an arc target.
    pub fn new<G>(graph: &'g G) -> Result<Self>
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        let rows = (0..graph.len())
            .map(|u| -> Result<(&'g V, Vec<&'g V>)> {
                let targets = graph
                    .neighbors(u)?
                    .iter()
                    .map(|&v| graph.vertex(v))
                    .collect::<Result<_>>()?;
                Ok((graph.vertex(u)?, targets))
            })
            .collect::<Result<_>>()?;
        Ok(Self { rows })
    }
}

impl<V: fmt::Display> fmt::Display for EdgesDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, (from, targets)) in self.rows.iter().enumerate() {
            write!(f, "{from} ({u}):")?;
            for to in targets {
                write!(f, " ({from}, {to})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The tree path from the root to one vertex.
///
/// ```text
/// A path from A to D: A B C D
/// ```
pub struct PathDisplay<'g, V> {
    path: Vec<&'g V>,
}

impl<'g, V> PathDisplay<'g, V> {
    /// Resolves the path from `tree`'s root to `index` in `graph`.
    ///
    /// # Errors
    /// As [`SearchTree::path`].
    pub fn new<G>(graph: &'g G, tree: &SearchTree, index: usize) -> Result<Self>
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        Ok(Self {
            path: tree.path(graph, index)?,
        })
    }
}

impl<V: fmt::Display> fmt::Display for PathDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(root), Some(target)) = (self.path.first(), self.path.last()) else {
            return Ok(());
        };
        write!(f, "A path from {root} to {target}:")?;
        for v in &self.path {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}

/// A tree's root and its `(parent, child)` edges.
///
/// ```text
/// Root is: A
/// Edges: (A, B) (B, C)
/// ```
pub struct TreeDisplay<'g, V> {
    root: &'g V,
    edges: Vec<(&'g V, &'g V)>,
}

impl<'g, V> TreeDisplay<'g, V> {
    /// Resolves `tree`'s root and edges in `graph`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `graph` no longer holds every vertex the tree names.
    pub fn new<G>(graph: &'g G, tree: &SearchTree) -> Result<Self>
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        let root = graph.vertex(tree.root())?;
        let edges = tree
            .tree_edges()
            .map(|e| -> Result<(&'g V, &'g V)> { Ok((graph.vertex(e.u)?, graph.vertex(e.v)?)) })
            .collect::<Result<_>>()?;
        Ok(Self { root, edges })
    }
}

impl<V: fmt::Display> fmt::Display for TreeDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root is: {}", self.root)?;
        write!(f, "Edges:")?;
        for (p, c) in &self.edges {
            write!(f, " ({p}, {c})")?;
        }
        Ok(())
    }
}

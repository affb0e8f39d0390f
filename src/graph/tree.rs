//! Spanning-tree snapshots produced by [`dfs`](crate::graph::traversal::dfs)
//! and [`bfs`](crate::graph::traversal::bfs).
//!
//! A [`SearchTree`] holds indices only. It never borrows the graph it was
//! computed from, so later mutation of that graph leaves the snapshot intact
//! (though its indices may then be stale). Queries that need vertex payloads
//! take the graph as an explicit argument.

use crate::error::{check_index, GraphError, Result};
use crate::graph::edge::Edge;
use crate::graph::Graph;

/// Which traversal produced a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalKind {
    /// Depth-first, pre-order.
    DepthFirst,
    /// Breadth-first, level order.
    BreadthFirst,
}

/// The immutable result of one traversal.
///
/// Invariants:
/// - `parent(root)` is `None` and `level(root)` is `Some(0)`
/// - a vertex is in `search_order` iff its level is `Some`
/// - every reached non-root vertex has exactly one parent, itself reached,
///   and `level(v) == level(parent(v)) + 1`
///
/// For breadth-first trees the level is the shortest hop distance from the root.
///
/// Deserialized trees are checked against these invariants and rejected with
/// [`GraphError::MalformedTree`] when they do not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSearchTree"))]
pub struct SearchTree {
    kind: TraversalKind,
    root: usize,
    parent: Vec<Option<usize>>,
    search_order: Vec<usize>,
    levels: Vec<Option<usize>>,
}

/// Unchecked wire form of [`SearchTree`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSearchTree {
    kind: TraversalKind,
    root: usize,
    parent: Vec<Option<usize>>,
    search_order: Vec<usize>,
    levels: Vec<Option<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSearchTree> for SearchTree {
    type Error = GraphError;

    fn try_from(raw: RawSearchTree) -> Result<Self> {
        let tree = Self {
            kind: raw.kind,
            root: raw.root,
            parent: raw.parent,
            search_order: raw.search_order,
            levels: raw.levels,
        };
        tree.check()?;
        Ok(tree)
    }
}

fn malformed(reason: &'static str) -> GraphError {
    GraphError::MalformedTree { reason }
}

impl SearchTree {
    /// Verifies the structural invariants listed on [`SearchTree`].
    ///
    /// Levels strictly decrease along parent links, so a passing tree has no
    /// parent cycles and every path walk ends at the root.
    pub(crate) fn check(&self) -> Result<()> {
        let n = self.parent.len();
        if self.levels.len() != n {
            return Err(malformed("parent and level tables differ in length"));
        }
        check_index(self.root, n)?;
        if self.search_order.first() != Some(&self.root) {
            return Err(malformed("search order must start at the root"));
        }
        if self.parent[self.root].is_some() || self.levels[self.root] != Some(0) {
            return Err(malformed("root must have no parent and level 0"));
        }

        let mut listed = vec![false; n];
        for &v in &self.search_order {
            check_index(v, n)?;
            if std::mem::replace(&mut listed[v], true) {
                return Err(malformed("vertex listed twice in search order"));
            }
        }

        for v in (0..n).filter(|&v| v != self.root) {
            if listed[v] != self.levels[v].is_some() {
                return Err(malformed("reached vertices must be exactly those with a level"));
            }
            match (listed[v], self.parent[v]) {
                (false, None) => {}
                (false, Some(_)) => return Err(malformed("unreached vertex with a parent")),
                (true, None) => return Err(malformed("reached vertex without a parent")),
                (true, Some(p)) => {
                    check_index(p, n)?;
                    if self.levels[v] != self.levels[p].map(|l| l + 1) {
                        return Err(malformed("level must be one more than the parent's"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Builds a breadth-first tree whose levels were recorded during the search.
    pub(crate) fn breadth_first(
        root: usize,
        parent: Vec<Option<usize>>,
        search_order: Vec<usize>,
        levels: Vec<Option<usize>>,
    ) -> Self {
        let tree = Self {
            kind: TraversalKind::BreadthFirst,
            root,
            parent,
            search_order,
            levels,
        };
        debug_assert_eq!(tree.check(), Ok(()));
        tree
    }

    /// Builds a depth-first tree, deriving levels from parent links.
    ///
    /// A vertex's parent always precedes it in pre-order, so one pass over
    /// `search_order` resolves every level.
    pub(crate) fn depth_first(root: usize, parent: Vec<Option<usize>>, search_order: Vec<usize>) -> Self {
        let mut levels = vec![None; parent.len()];
        for &v in &search_order {
            levels[v] = match parent[v] {
                Some(p) => levels[p].map(|l: usize| l + 1),
                None => Some(0),
            };
        }
        let tree = Self {
            kind: TraversalKind::DepthFirst,
            root,
            parent,
            search_order,
            levels,
        };
        debug_assert_eq!(tree.check(), Ok(()));
        tree
    }

    /// Returns the traversal that produced this tree.
    #[inline]
    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Returns the start vertex.
    #[inline]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the vertex count of the graph at the time of the traversal.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// Returns the parent of `index`.
    ///
    /// `None` for the root, for unreached vertices and for indices outside the snapshot.
    #[inline]
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parent.get(index).copied().flatten()
    }

    /// Returns the vertices in visitation order.
    #[inline]
    pub fn search_order(&self) -> &[usize] {
        &self.search_order
    }

    /// Returns the number of vertices the traversal reached.
    #[inline]
    pub fn vertices_found(&self) -> usize {
        self.search_order.len()
    }

    /// Returns the level of `index`, or `None` if it was not reached.
    #[inline]
    pub fn level(&self, index: usize) -> Option<usize> {
        self.levels.get(index).copied().flatten()
    }

    /// Returns the level of every vertex; `None` marks unreached vertices.
    #[inline]
    pub fn levels(&self) -> &[Option<usize>] {
        &self.levels
    }

    /// Returns `true` if the traversal reached `index`.
    #[inline]
    pub fn is_reached(&self, index: usize) -> bool {
        self.level(index).is_some()
    }

    /// Returns the deepest level reached.
    pub fn max_level(&self) -> usize {
        self.levels.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns every vertex at `level`, in index order.
    pub fn nodes_at_level(&self, level: usize) -> Vec<usize> {
        self.levels
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| (l == Some(level)).then_some(i))
            .collect()
    }

    /// Returns the tree arcs `parent -> child`, ordered by child index.
    pub fn tree_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, &p)| p.map(|p| Edge::new(p, child)))
    }

    /// Returns the indices on the tree path from the root to `index`, inclusive.
    ///
    /// # Errors
    /// - [`GraphError::IndexOutOfBounds`] if `index` is outside the snapshot
    /// - [`GraphError::Unreached`] if the traversal never reached `index`
    pub fn path_indices(&self, index: usize) -> Result<Vec<usize>> {
        check_index(index, self.vertex_count())?;
        let Some(level) = self.level(index) else {
            return Err(GraphError::Unreached { index });
        };

        let mut path = Vec::with_capacity(level + 1);
        let mut current = Some(index);
        while let Some(v) = current {
            path.push(v);
            current = self.parent[v];
        }
        path.reverse();
        Ok(path)
    }

    /// Returns the vertex payloads on the tree path from the root to `index`.
    ///
    /// `graph` must be the graph this tree was computed from, unmodified since.
    ///
    /// # Errors
    /// As [`SearchTree::path_indices`], plus
    /// [`GraphError::IndexOutOfBounds`] if `graph` has since lost vertices.
    pub fn path<'g, G>(&self, graph: &'g G, index: usize) -> Result<Vec<&'g G::Vertex>>
    where
        G: Graph + ?Sized,
    {
        self.path_indices(index)?
            .into_iter()
            .map(|v| graph.vertex(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1 - 2, 3 isolated; DFS from 0.
    fn chain() -> SearchTree {
        SearchTree::depth_first(0, vec![None, Some(0), Some(1), None], vec![0, 1, 2])
    }

    #[test]
    fn depth_first_levels_follow_parents() {
        let tree = chain();
        assert_eq!(tree.kind(), TraversalKind::DepthFirst);
        assert_eq!(tree.levels(), &[Some(0), Some(1), Some(2), None]);
        assert_eq!(tree.max_level(), 2);
        assert_eq!(tree.nodes_at_level(1), vec![1]);
        assert!(tree.nodes_at_level(5).is_empty());
        assert!(!tree.is_reached(3));
        assert_eq!(tree.vertices_found(), 3);
    }

    #[test]
    fn parent_is_none_for_root_unreached_and_foreign() {
        let tree = chain();
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), None);
        assert_eq!(tree.parent(42), None);
    }

    #[test]
    fn path_indices_run_root_first() {
        let tree = chain();
        assert_eq!(tree.path_indices(2), Ok(vec![0, 1, 2]));
        assert_eq!(tree.path_indices(0), Ok(vec![0]));
        assert_eq!(tree.path_indices(3), Err(GraphError::Unreached { index: 3 }));
        assert_eq!(
            tree.path_indices(4),
            Err(GraphError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn tree_edges_point_parent_to_child() {
        let tree = chain();
        let edges: Vec<_> = tree.tree_edges().collect();
        assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(1, 2)]);
    }

    #[test]
    fn single_vertex_tree() {
        let tree = SearchTree::breadth_first(0, vec![None], vec![0], vec![Some(0)]);
        assert_eq!(tree.max_level(), 0);
        assert_eq!(tree.nodes_at_level(0), vec![0]);
        assert_eq!(tree.tree_edges().count(), 0);
    }

    fn raw(root: usize, parent: Vec<Option<usize>>, order: Vec<usize>, levels: Vec<Option<usize>>) -> SearchTree {
        SearchTree {
            kind: TraversalKind::BreadthFirst,
            root,
            parent,
            search_order: order,
            levels,
        }
    }

    #[test]
    fn check_accepts_traversal_output() {
        assert_eq!(chain().check(), Ok(()));
    }

    #[test]
    fn check_rejects_parent_outside_snapshot() {
        let tree = raw(0, vec![None, Some(7)], vec![0, 1], vec![Some(0), Some(1)]);
        assert_eq!(
            tree.check(),
            Err(GraphError::IndexOutOfBounds { index: 7, len: 2 })
        );
    }

    #[test]
    fn check_rejects_parent_cycle() {
        // 1 and 2 point at each other and never reach the root.
        let tree = raw(
            0,
            vec![None, Some(2), Some(1)],
            vec![0, 1, 2],
            vec![Some(0), Some(1), Some(1)],
        );
        assert!(matches!(tree.check(), Err(GraphError::MalformedTree { .. })));
    }

    #[test]
    fn check_rejects_inconsistent_tables() {
        let mismatched = raw(0, vec![None, None], vec![0], vec![Some(0)]);
        assert!(matches!(mismatched.check(), Err(GraphError::MalformedTree { .. })));

        let bad_root = raw(3, vec![None], vec![0], vec![Some(0)]);
        assert_eq!(
            bad_root.check(),
            Err(GraphError::IndexOutOfBounds { index: 3, len: 1 })
        );

        let rooted_parent = raw(0, vec![Some(0)], vec![0], vec![Some(0)]);
        assert!(rooted_parent.check().is_err());

        let orphan = raw(0, vec![None, None], vec![0, 1], vec![Some(0), Some(1)]);
        assert!(orphan.check().is_err());

        let unlisted_level = raw(0, vec![None, Some(0)], vec![0], vec![Some(0), Some(1)]);
        assert!(unlisted_level.check().is_err());

        let repeated = raw(0, vec![None, Some(0)], vec![0, 1, 1], vec![Some(0), Some(1)]);
        assert!(repeated.check().is_err());
    }
}

//! A dynamic, undirected adjacency-list graph over arbitrary vertex payloads.
//!
//! Vertices live in insertion order; a vertex's *index* is its position in
//! that order and is the only identifier the rest of the crate uses.
//! Each adjacency list holds the targets of a vertex's outgoing arcs in
//! insertion order. An undirected edge `{u, v}` is stored as two arcs.
//!
//! ## Index invalidation
//! [`UnweightedGraph::remove_vertex`] and [`UnweightedGraph::remove_vertex_at`]
//! shift every index above the removed one down by one. Indices obtained
//! before a removal must be treated as stale afterwards; look them up again
//! with [`UnweightedGraph::index_of`] or [`UnweightedGraph::position`].

use tracing::{debug, trace};

use crate::error::{check_index, Result};
use crate::graph::edge::Edge;
use crate::graph::invariants::invariant_assert_msg;
use crate::graph::traversal;
use crate::graph::tree::SearchTree;
use crate::graph::Graph;

/// A mutable undirected graph whose vertices are addressed by dense index.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `remove_vertex` | \(O(n + m)\) | Re-indexes every adjacency list |
/// | `add_edge` | \(O(\text{degree})\) | Checks for an existing arc first |
/// | `remove_edge` | \(O(\text{degree})\) | Linear scan of both lists |
/// | `index_of` | \(O(n)\) | Linear scan, first match wins |
/// | `neighbors` / `degree` | \(O(1)\) | Borrowed slice |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnweightedGraph<V> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<usize>>,
}

impl<V> Default for UnweightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UnweightedGraph<V> {
    /// Creates an empty graph.
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
        }
    }

    /// Builds a graph from vertices and undirected edges.
    ///
    /// Edges are `(u, v)` index pairs; convert [`Edge`] values with `Into::into`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// for the first edge naming a missing vertex.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let mut graph: Self = vertices.into_iter().collect();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertex payloads; position `i` holds vertex `i`.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the payloads mutably. Indices and edges are unaffected.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [V] {
        &mut self.vertices
    }

    /// Returns the payload of vertex `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `index >= len()`.
    pub fn vertex(&self, index: usize) -> Result<&V> {
        check_index(index, self.len())?;
        Ok(&self.vertices[index])
    }

    /// Returns the payload of vertex `index` mutably.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `index >= len()`.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut V> {
        check_index(index, self.len())?;
        Ok(&mut self.vertices[index])
    }

    /// Returns the index of the first vertex equal to `value`.
    pub fn index_of(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.vertices.iter().position(|v| v == value)
    }

    /// Returns the index of the first vertex matching `predicate`.
    ///
    /// Use this when payload equality is too strict, e.g. lookup by name.
    pub fn position(&self, predicate: impl FnMut(&V) -> bool) -> Option<usize> {
        self.vertices.iter().position(predicate)
    }

    /// Returns the targets of `index`'s outgoing arcs, in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `index >= len()`.
    pub fn neighbors(&self, index: usize) -> Result<&[usize]> {
        check_index(index, self.len())?;
        Ok(&self.adjacency[index])
    }

    /// Returns the number of outgoing arcs of `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `index >= len()`.
    pub fn degree(&self, index: usize) -> Result<usize> {
        self.neighbors(index).map(<[usize]>::len)
    }

    /// Returns `true` if the arc `u -> v` exists. Out-of-range indices yield `false`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|nbrs| nbrs.contains(&v))
    }

    /// Returns the number of directed arcs.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the number of undirected edges; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().filter(|e| e.u <= e.v).count()
    }

    /// Iterates over every arc, grouped by source vertex in index order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| Edge::new(u, v)))
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, value: V) -> usize {
        let index = self.vertices.len();
        self.vertices.push(value);
        self.adjacency.push(Vec::new());
        trace!(index, "added vertex");
        index
    }

    /// Appends every vertex from `values`, in order.
    pub fn add_vertices(&mut self, values: impl IntoIterator<Item = V>) {
        for value in values {
            self.add_vertex(value);
        }
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Inserts the arc `u -> v` and, unless `u == v`, the arc `v -> u`.
    /// Arcs already present are skipped. Returns `true` if any arc was inserted.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if either endpoint is missing. Nothing is inserted in that case.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let len = self.len();
        check_index(u, len)?;
        check_index(v, len)?;

        let mut added = self.insert_arc(u, v);
        if u != v {
            added |= self.insert_arc(v, u);
        }
        if added {
            debug!(u, v, "added edge");
        }
        Ok(added)
    }

    fn insert_arc(&mut self, from: usize, to: usize) -> bool {
        let nbrs = &mut self.adjacency[from];
        if nbrs.contains(&to) {
            false
        } else {
            nbrs.push(to);
            true
        }
    }

    /// Removes the undirected edge `{u, v}`.
    ///
    /// Returns `true` if any arc was removed. Out-of-range indices are not an
    /// error here and yield `false`.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let len = self.len();
        if u >= len || v >= len {
            return false;
        }

        let mut removed = Self::remove_arc(&mut self.adjacency[u], v);
        if u != v {
            removed |= Self::remove_arc(&mut self.adjacency[v], u);
        }
        if removed {
            debug!(u, v, "removed edge");
        }
        removed
    }

    fn remove_arc(nbrs: &mut Vec<usize>, to: usize) -> bool {
        match nbrs.iter().position(|&x| x == to) {
            Some(pos) => {
                nbrs.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes the first vertex equal to `value` along with its incident edges.
    ///
    /// Returns `false` if no vertex matches. On success every index above the
    /// removed one shifts down by one.
    pub fn remove_vertex(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_vertex_at(index).is_some(),
            None => false,
        }
    }

    /// Removes vertex `index` and its incident edges, returning its payload.
    ///
    /// Returns `None` if `index >= len()`. This is \(O(n + m)\): arcs into the
    /// removed vertex are dropped and every index above it shifts down by one.
    pub fn remove_vertex_at(&mut self, index: usize) -> Option<V> {
        if index >= self.len() {
            return None;
        }

        let value = self.vertices.remove(index);
        self.adjacency.remove(index);

        for nbrs in &mut self.adjacency {
            nbrs.retain(|&v| v != index);
            for v in nbrs.iter_mut() {
                if *v > index {
                    *v -= 1;
                }
            }
        }

        debug!(index, remaining = self.len(), "removed vertex");
        Some(value)
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        debug!("cleared graph");
    }

    /// Depth-first search from `start`. See [`traversal::dfs`].
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `start >= len()`.
    pub fn dfs(&self, start: usize) -> Result<SearchTree> {
        traversal::dfs(self, start)
    }

    /// Breadth-first search from `start`. See [`traversal::bfs`].
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
    /// if `start >= len()`.
    pub fn bfs(&self, start: usize) -> Result<SearchTree> {
        traversal::bfs(self, start)
    }

    /// Validates the structural invariants of the store.
    ///
    /// This method checks that:
    /// 1. There is exactly one adjacency list per vertex
    /// 2. Every arc target is a live index
    /// 3. No adjacency list holds a duplicate arc
    /// 4. Every non-loop arc has its reverse
    ///
    /// Returns `true` if all invariants hold. Debug builds also assert each one.
    ///
    /// Costs \(O(m \cdot \text{degree})\); mutators never call it.
    pub fn validate_invariants(&self) -> bool {
        let n = self.len();
        let mut ok = self.adjacency.len() == n;
        invariant_assert_msg(ok, "adjacency list count must match vertex count");

        for (u, nbrs) in self.adjacency.iter().enumerate() {
            for (i, &v) in nbrs.iter().enumerate() {
                let in_bounds = v < n;
                invariant_assert_msg(in_bounds, "arc target out of bounds");
                let unique = !nbrs[..i].contains(&v);
                invariant_assert_msg(unique, "duplicate arc");
                let paired = in_bounds && (u == v || self.adjacency[v].contains(&u));
                invariant_assert_msg(paired, "arc without its reverse");
                ok &= in_bounds && unique && paired;
            }
        }

        ok
    }
}

impl<V> Graph for UnweightedGraph<V> {
    type Vertex = V;

    #[inline]
    fn len(&self) -> usize {
        UnweightedGraph::len(self)
    }

    #[inline]
    fn vertex(&self, index: usize) -> Result<&V> {
        UnweightedGraph::vertex(self, index)
    }

    #[inline]
    fn neighbors(&self, index: usize) -> Result<&[usize]> {
        UnweightedGraph::neighbors(self, index)
    }
}

impl<V> FromIterator<V> for UnweightedGraph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_vertices(iter);
        graph
    }
}

impl<V> Extend<V> for UnweightedGraph<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.add_vertices(iter);
    }
}

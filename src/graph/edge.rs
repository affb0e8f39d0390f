//! Directed arcs between vertex indices.

/// One directed arc `u -> v` in an adjacency list.
///
/// The public graph is undirected; an undirected edge `{u, v}` with `u != v`
/// is stored as the two arcs `(u, v)` and `(v, u)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source vertex index.
    pub u: usize,
    /// Target vertex index.
    pub v: usize,
}

impl Edge {
    /// Creates the arc `u -> v`.
    #[inline]
    pub const fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    /// Returns the arc `v -> u`.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self { u: self.v, v: self.u }
    }

    /// Returns `true` for a self-loop.
    #[inline]
    pub const fn is_loop(self) -> bool {
        self.u == self.v
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((u, v): (usize, usize)) -> Self {
        Self::new(u, v)
    }
}

impl From<Edge> for (usize, usize) {
    #[inline]
    fn from(e: Edge) -> Self {
        (e.u, e.v)
    }
}

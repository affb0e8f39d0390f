//! Error type shared by the graph store and its traversals.

/// Misuse of a graph or tree query.
///
/// "Not found" outcomes (removing an absent edge or vertex) are reported as
/// `bool` results and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index was outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Vertex count at the time of the call.
        len: usize,
    },
    /// A path was requested for a vertex the traversal never reached.
    Unreached {
        /// The unreached vertex index.
        index: usize,
    },
    /// A search tree's parent links, levels or search order contradict each other.
    MalformedTree {
        /// Which invariant failed.
        reason: &'static str,
    },
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "no such index: {index} (vertex count is {len})")
            }
            Self::Unreached { index } => {
                write!(f, "vertex {index} was not reached by the traversal")
            }
            Self::MalformedTree { reason } => write!(f, "malformed search tree: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Checks `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(GraphError::IndexOutOfBounds { index, len })
    }
}

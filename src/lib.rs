//! # `arbor` - Index-Addressed Graphs and Search Trees
//!
//! A mutable, undirected graph over arbitrary vertex payloads, addressed by
//! dense integer index, with depth-first and breadth-first traversals that
//! return immutable spanning-tree snapshots.
//!
//! ## Key Features
//!
//! - **Dense indices**: vertex `i` is the `i`-th inserted vertex still present;
//!   removing a vertex shifts every higher index down by one
//! - **Undirected edges as arc pairs**: `add_edge(u, v)` stores `u -> v` and
//!   `v -> u`; duplicate arcs are absorbed silently
//! - **Snapshot trees**: a [`SearchTree`] holds parent links, discovery
//!   order and levels by index only, so it outlives later graph mutation
//! - **Shortest hop distances**: breadth-first levels are minimum arc counts
//!   from the root
//!
//! ## Error Model
//!
//! Out-of-range indices passed to queries, `add_edge` or a traversal are
//! caller misuse and return [`GraphError::IndexOutOfBounds`]. Removing an
//! absent edge or vertex is an expected outcome and returns `false`.
//!
//! ## Logging
//!
//! Mutations and traversal summaries are emitted through `tracing` at
//! `debug`/`trace` level. The crate installs no subscriber.
//!
//! ## Example
//!
//! ```rust
//! use arbor::{PathDisplay, UnweightedGraph};
//!
//! let graph = UnweightedGraph::from_edges(["A", "B", "C", "D"], [(0, 1), (1, 2), (2, 3)])?;
//!
//! let tree = graph.bfs(0)?;
//! assert_eq!(tree.search_order(), &[0, 1, 2, 3]);
//! assert_eq!(tree.level(3), Some(3));
//! assert_eq!(tree.path(&graph, 3)?, [&"A", &"B", &"C", &"D"]);
//! assert_eq!(
//!     PathDisplay::new(&graph, &tree, 3)?.to_string(),
//!     "A path from A to D: A B C D"
//! );
//! # Ok::<(), arbor::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    bfs, dfs, dfs_forest, Edge, EdgesDisplay, Graph, PathDisplay, SearchTree, TraversalKind, TreeDisplay,
    UnweightedGraph,
};

//! Depth-first and breadth-first traversals producing [`SearchTree`] snapshots.
//!
//! Both traversals read a [`Graph`] through its neighbor contract only and
//! never mutate it. Ties are broken by adjacency order, so results are
//! deterministic for a fixed graph.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{check_index, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::tree::SearchTree;
use crate::graph::Graph;

/// Depth-first (pre-order) search from `start`.
///
/// Neighbors are explored in adjacency order; a vertex's parent is the vertex
/// from which it was first discovered. Vertices unreachable from `start` are
/// absent from the search order and have neither parent nor level.
///
/// Uses an explicit stack of adjacency cursors, so path-shaped graphs of any
/// length are safe.
///
/// # Errors
/// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
/// if `start >= graph.len()`.
pub fn dfs<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<SearchTree> {
    let n = graph.len();
    check_index(start, n)?;

    let mut visited = VisitedSet::new(n);
    let mut parent = vec![None; n];
    let mut search_order = Vec::new();
    visit_depth_first(graph, start, &mut visited, &mut parent, &mut search_order)?;

    let tree = SearchTree::depth_first(start, parent, search_order);
    debug!(
        start,
        found = tree.vertices_found(),
        depth = tree.max_level(),
        "dfs complete"
    );
    Ok(tree)
}

fn visit_depth_first<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
    visited: &mut VisitedSet,
    parent: &mut [Option<usize>],
    search_order: &mut Vec<usize>,
) -> Result<()> {
    visited.try_visit(start);
    search_order.push(start);

    // (vertex, position of the next neighbor to examine)
    let mut stack = vec![(start, 0usize)];
    while let Some(top) = stack.last_mut() {
        let (u, cursor) = *top;
        let nbrs = graph.neighbors(u)?;
        let Some(&v) = nbrs.get(cursor) else {
            stack.pop();
            continue;
        };
        top.1 += 1;

        check_index(v, visited.len())?;
        if visited.try_visit(v) {
            parent[v] = Some(u);
            search_order.push(v);
            stack.push((v, 0));
        }
    }
    Ok(())
}

/// Breadth-first search from `start`.
///
/// The level of every reached vertex is its shortest hop distance from
/// `start`. Vertices at the same level are visited in the order they were
/// discovered, which follows adjacency (edge-insertion) order.
///
/// # Errors
/// Returns [`GraphError::IndexOutOfBounds`](crate::GraphError::IndexOutOfBounds)
/// if `start >= graph.len()`.
pub fn bfs<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<SearchTree> {
    let n = graph.len();
    check_index(start, n)?;

    let mut visited = VisitedSet::new(n);
    let mut parent = vec![None; n];
    let mut levels = vec![None; n];
    let mut search_order = Vec::new();
    let mut queue = VecDeque::new();

    visited.try_visit(start);
    levels[start] = Some(0);
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        search_order.push(u);
        let next_level = levels[u].map(|l: usize| l + 1);
        for &v in graph.neighbors(u)? {
            check_index(v, n)?;
            if visited.try_visit(v) {
                parent[v] = Some(u);
                levels[v] = next_level;
                queue.push_back(v);
            }
        }
    }

    let tree = SearchTree::breadth_first(start, parent, search_order, levels);
    debug!(
        start,
        found = tree.vertices_found(),
        depth = tree.max_level(),
        "bfs complete"
    );
    Ok(tree)
}

/// Depth-first spanning forest of the whole graph.
///
/// Starts a depth-first search at the lowest-index unvisited vertex, repeatedly,
/// until every vertex is covered. Returns one tree per connected component, in
/// order of their lowest vertex index. Each tree is sized to the full graph, so
/// its indices are directly comparable with the graph's.
///
/// # Errors
/// Only if `graph` reports an arc to a missing vertex.
pub fn dfs_forest<G: Graph + ?Sized>(graph: &G) -> Result<Vec<SearchTree>> {
    let n = graph.len();
    let mut visited = VisitedSet::new(n);
    let mut forest = Vec::new();

    let mut next = visited.next_unvisited(0);
    while let Some(root) = next {
        let mut parent = vec![None; n];
        let mut search_order = Vec::new();
        visit_depth_first(graph, root, &mut visited, &mut parent, &mut search_order)?;
        forest.push(SearchTree::depth_first(root, parent, search_order));
        next = visited.next_unvisited(root + 1);
    }

    debug!(vertices = n, components = forest.len(), "dfs forest complete");
    Ok(forest)
}

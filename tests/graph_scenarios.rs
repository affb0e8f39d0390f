use arbor::{dfs_forest, Edge, GraphError, TraversalKind, TreeDisplay, UnweightedGraph};

fn abcd() -> UnweightedGraph<&'static str> {
    UnweightedGraph::from_edges(["A", "B", "C", "D"], [(0, 1), (1, 2), (2, 3)]).unwrap()
}

#[test]
fn bfs_on_a_path() {
    let graph = abcd();
    let tree = graph.bfs(0).unwrap();

    assert_eq!(tree.root(), 0);
    assert_eq!(tree.kind(), TraversalKind::BreadthFirst);
    assert_eq!(tree.search_order(), &[0, 1, 2, 3]);
    assert_eq!(tree.levels(), &[Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(tree.path(&graph, 3).unwrap(), [&"A", &"B", &"C", &"D"]);
    assert_eq!(tree.max_level(), 3);
}

#[test]
fn removing_a_middle_vertex_renumbers_survivors() {
    let mut graph = abcd();
    assert!(graph.remove_vertex(&"B"));

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.vertices(), &["A", "C", "D"]);
    // A-B and B-C vanish with B; C-D (was 2-3) becomes 1-2.
    let arcs: Vec<Edge> = graph.edges().collect();
    assert_eq!(arcs, vec![Edge::new(1, 2), Edge::new(2, 1)]);
    assert_eq!(graph.edge_count(), 1);

    let tree = graph.bfs(0).unwrap();
    assert_eq!(tree.search_order(), &[0]);
    assert_eq!(tree.path(&graph, 2), Err(GraphError::Unreached { index: 2 }));
}

#[test]
fn removing_the_last_vertex_leaves_lower_indices_alone() {
    let mut graph = abcd();
    assert_eq!(graph.remove_vertex_at(3), Some("D"));
    assert_eq!(graph.neighbors(2).unwrap(), &[1]);
    assert_eq!(graph.neighbors(1).unwrap(), &[0, 2]);
}

#[test]
fn remove_by_value_takes_first_match() {
    let mut graph = UnweightedGraph::from_edges(["x", "y", "x"], [(0, 1), (1, 2)]).unwrap();
    assert!(graph.remove_vertex(&"x"));
    assert_eq!(graph.vertices(), &["y", "x"]);
    assert_eq!(graph.neighbors(0).unwrap(), &[1]);
    assert_eq!(graph.neighbors(1).unwrap(), &[0]);
}

#[test]
fn from_edges_rejects_bad_index() {
    let result = UnweightedGraph::from_edges(["A", "B"], [(0, 1), (1, 2)]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::IndexOutOfBounds { index: 2, len: 2 }
    );
}

#[test]
fn edges_convert_into_pairs() {
    let arcs = [Edge::new(0, 1), Edge::new(1, 2)];
    let graph = UnweightedGraph::from_edges(['p', 'q', 'r'], arcs.map(Into::into)).unwrap();
    assert!(graph.has_edge(2, 1));
}

#[test]
fn bfs_and_dfs_diverge_on_a_cycle() {
    // square 0-1-2-3-0
    let graph = UnweightedGraph::from_edges(0..4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

    let bfs = graph.bfs(0).unwrap();
    assert_eq!(bfs.search_order(), &[0, 1, 3, 2]);
    assert_eq!(bfs.level(2), Some(2));

    let dfs = graph.dfs(0).unwrap();
    assert_eq!(dfs.search_order(), &[0, 1, 2, 3]);
    assert_eq!(dfs.level(3), Some(3));
    assert_eq!(dfs.path_indices(3), Ok(vec![0, 1, 2, 3]));
}

#[test]
fn forest_trees_partition_vertices() {
    let graph = UnweightedGraph::from_edges(0..6, [(0, 3), (1, 4), (4, 5)]).unwrap();
    let forest = dfs_forest(&graph).unwrap();

    let roots: Vec<usize> = forest.iter().map(|t| t.root()).collect();
    assert_eq!(roots, vec![0, 1, 2]);

    let mut covered: Vec<usize> = forest.iter().flat_map(|t| t.search_order().to_vec()).collect();
    covered.sort_unstable();
    assert_eq!(covered, (0..6).collect::<Vec<_>>());
}

#[test]
fn tree_display_after_dfs() {
    let graph = abcd();
    let tree = graph.dfs(1).unwrap();
    let text = TreeDisplay::new(&graph, &tree).unwrap().to_string();
    assert_eq!(text, "Root is: B\nEdges: (B, A) (B, C) (C, D)");
}

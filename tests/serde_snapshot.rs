#![cfg(feature = "serde")]

use arbor::{Edge, SearchTree, UnweightedGraph};
use serde_json::json;

#[test]
fn search_tree_snapshot_serializes() {
    let graph = UnweightedGraph::from_edges(["A", "B", "C"], [(0, 1), (1, 2)]).unwrap();
    let tree = graph.bfs(0).unwrap();

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["kind"], "BreadthFirst");
    assert_eq!(json["root"], 0);
    assert_eq!(json["search_order"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["levels"], serde_json::json!([0, 1, 2]));

    let back: SearchTree = serde_json::from_value(json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn edge_serializes_as_struct() {
    let json = serde_json::to_string(&Edge::new(3, 4)).unwrap();
    assert_eq!(json, r#"{"u":3,"v":4}"#);
}

#[test]
fn deserialize_rejects_parent_outside_snapshot() {
    let json = json!({
        "kind": "BreadthFirst",
        "root": 0,
        "parent": [7],
        "search_order": [0],
        "levels": [0],
    });
    let err = serde_json::from_value::<SearchTree>(json).unwrap_err();
    assert!(err.to_string().contains("root must have no parent"), "{err}");

    let json = json!({
        "kind": "BreadthFirst",
        "root": 0,
        "parent": [null, 7],
        "search_order": [0, 1],
        "levels": [0, 1],
    });
    let err = serde_json::from_value::<SearchTree>(json).unwrap_err();
    assert!(err.to_string().contains("no such index: 7"), "{err}");
}

#[test]
fn deserialize_rejects_parent_cycle() {
    let json = json!({
        "kind": "DepthFirst",
        "root": 0,
        "parent": [null, 2, 1],
        "search_order": [0, 1, 2],
        "levels": [0, 1, 1],
    });
    let err = serde_json::from_value::<SearchTree>(json).unwrap_err();
    assert!(err.to_string().contains("malformed search tree"), "{err}");
}

#[test]
fn deserialize_rejects_mismatched_tables() {
    let json = json!({
        "kind": "BreadthFirst",
        "root": 0,
        "parent": [null, 0],
        "search_order": [0, 1],
        "levels": [0],
    });
    assert!(serde_json::from_value::<SearchTree>(json).is_err());
}

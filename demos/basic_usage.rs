//! Basic graph and traversal usage example

use arbor::{EdgesDisplay, PathDisplay, TreeDisplay, UnweightedGraph};

fn main() -> anyhow::Result<()> {
    println!("Graph Basic Usage Example");
    println!("=========================");

    let mut graph = UnweightedGraph::from_edges(
        ["Seattle", "Denver", "Chicago", "Boston", "Atlanta"],
        [(0, 1), (1, 2), (2, 3), (1, 4), (4, 3)],
    )?;

    println!("Adjacency:");
    print!("{}", EdgesDisplay::new(&graph)?);

    let bfs = graph.bfs(0)?;
    println!("\nBFS from Seattle: {:?}", bfs.search_order());
    for level in 0..=bfs.max_level() {
        let names: Vec<_> = bfs
            .nodes_at_level(level)
            .into_iter()
            .map(|i| graph.vertices()[i])
            .collect();
        println!("  level {level}: {names:?}");
    }
    println!("{}", PathDisplay::new(&graph, &bfs, 3)?);

    let dfs = graph.dfs(0)?;
    println!("\nDFS from Seattle: {:?}", dfs.search_order());
    println!("{}", TreeDisplay::new(&graph, &dfs)?);

    // Indices above Denver shift down by one.
    graph.remove_vertex(&"Denver");
    println!("\nAfter removing Denver:");
    print!("{}", EdgesDisplay::new(&graph)?);

    // The earlier snapshot is unaffected by the removal.
    println!("BFS snapshot still lists {} vertices", bfs.vertices_found());

    Ok(())
}

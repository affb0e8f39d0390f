//! Movie recommendations from breadth-first levels.
//!
//! Users link to the movies they watched, movies link to their genre. A BFS
//! from a user reaches other viewers' movies and same-genre movies; movies
//! the user has not watched are recommended, closest level first.
//!
//! ```text
//! RUST_LOG=arbor=debug cargo run --example recommend -- --user Alice
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use arbor::UnweightedGraph;

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Recommend movies by graph proximity", long_about = None)]
struct Cli {
    /// User to recommend for
    #[arg(long, default_value = "Alice")]
    user: String,

    /// Only consider movies within this many hops
    #[arg(long)]
    max_level: Option<usize>,

    /// Log verbosely
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    User,
    Movie,
    Genre,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    User { name: String },
    Movie { name: String, genre: String },
    Genre { name: String },
}

impl Node {
    fn kind(&self) -> Kind {
        match self {
            Node::User { .. } => Kind::User,
            Node::Movie { .. } => Kind::Movie,
            Node::Genre { .. } => Kind::Genre,
        }
    }

    fn name(&self) -> &str {
        match self {
            Node::User { name } | Node::Movie { name, .. } | Node::Genre { name } => name,
        }
    }
}

const MOVIES: &[(&str, &str)] = &[
    ("Alien", "Sci-Fi"),
    ("Arrival", "Sci-Fi"),
    ("Heat", "Action"),
    ("Ronin", "Action"),
    ("Amelie", "Romance"),
    ("Up", "Comedy"),
];

const WATCHED: &[(&str, &[&str])] = &[
    ("Alice", &["Alien", "Heat"]),
    ("Bob", &["Alien", "Up"]),
    ("Carol", &["Heat", "Ronin", "Amelie"]),
    ("Dave", &["Up"]),
];

fn find(graph: &UnweightedGraph<Node>, kind: Kind, name: &str) -> Option<usize> {
    graph.position(|n| n.kind() == kind && n.name() == name)
}

fn sample_graph() -> Result<UnweightedGraph<Node>> {
    let mut graph = UnweightedGraph::new();

    for &(movie, genre) in MOVIES {
        let m = graph.add_vertex(Node::Movie {
            name: movie.into(),
            genre: genre.into(),
        });
        let g = match find(&graph, Kind::Genre, genre) {
            Some(g) => g,
            None => graph.add_vertex(Node::Genre { name: genre.into() }),
        };
        graph.add_edge(m, g)?;
    }

    for &(user, movies) in WATCHED {
        let u = graph.add_vertex(Node::User { name: user.into() });
        for movie in movies {
            let m = find(&graph, Kind::Movie, movie).with_context(|| format!("unknown movie {movie}"))?;
            graph.add_edge(u, m)?;
        }
    }

    Ok(graph)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("arbor=trace,recommend=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let graph = sample_graph()?;
    info!(vertices = graph.len(), edges = graph.edge_count(), "loaded sample graph");

    let Some(user) = find(&graph, Kind::User, &cli.user) else {
        bail!("no such user: {}", cli.user);
    };

    let tree = graph.bfs(user)?;
    let watched = graph.neighbors(user)?;
    let max_level = cli.max_level.unwrap_or_else(|| tree.max_level());

    println!("Recommended movies for {}:", cli.user);
    let mut any = false;
    for &v in tree.search_order() {
        let Some(level) = tree.level(v).filter(|&l| l <= max_level) else {
            continue;
        };
        if let Node::Movie { name, genre } = graph.vertex(v)? {
            if watched.contains(&v) {
                continue;
            }
            let via: Vec<&str> = tree.path(&graph, v)?.into_iter().map(Node::name).collect();
            println!(" - {name} ({genre}), {level} hops via {}", via.join(" -> "));
            any = true;
        }
    }
    if !any {
        println!("No recommendations available.");
    }

    Ok(())
}

//! CLI entry point for the `adjg` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use adjgraph::cli::commands::{self, ArcSpec};
use adjgraph::types::GraphKind;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — build small in-memory graphs and run DFS, BFS and Dijkstra"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph description shared by every subcommand that takes one.
#[derive(Args)]
struct GraphArgs {
    /// Comma-separated vertex labels, indexed in order
    #[arg(long, value_delimiter = ',', required = true)]
    vertices: Vec<String>,

    /// Arc as FROM:TO or FROM:TO:WEIGHT (repeatable)
    #[arg(long = "arc", value_parser = commands::parse_arc)]
    arcs: Vec<ArcSpec>,

    /// Store every arc in both directions
    #[arg(long)]
    undirected: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Dijkstra, DFS and BFS on the built-in six-vertex graph
    Demo,
    /// Summarize a graph
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first visit order over every component
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first visit order over every component
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Shortest distances from a source vertex
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,
        /// Source vertex label
        #[arg(long)]
        source: String,
    },
}

fn build(args: &GraphArgs) -> Result<adjgraph::AdjacencyGraph, GraphError> {
    let kind = if args.undirected {
        GraphKind::Undirected
    } else {
        GraphKind::Directed
    };
    commands::build_graph(kind, &args.vertices, &args.arcs)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Info { graph } => build(&graph).and_then(|g| commands::cmd_info(&g, json)),
        Commands::Dfs { graph } => build(&graph).and_then(|g| commands::cmd_dfs(&g, json)),
        Commands::Bfs { graph } => build(&graph).and_then(|g| commands::cmd_bfs(&g, json)),
        Commands::Dijkstra { graph, source } => {
            build(&graph).and_then(|g| commands::cmd_dijkstra(&g, &source, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::VertexNotFound(_) | GraphError::ArcNotFound { .. } => 4,
            GraphError::BulkArc { source, .. } => match source.as_ref() {
                GraphError::VertexNotFound(_) => 4,
                _ => 1,
            },
            _ => 1,
        };
        process::exit(code);
    }
}
